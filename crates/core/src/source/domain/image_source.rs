use std::time::Duration;

use thiserror::Error;

use crate::shared::raster::RasterImage;

/// Why an identifier could not be turned into a decoded raster.
#[derive(Error, Debug)]
pub enum LoadErrorKind {
    #[error("invalid URL format")]
    InvalidUrl,
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("server responded with {0}")]
    Status(reqwest::StatusCode),
    #[error("could not read file: {0}")]
    Io(#[source] std::io::Error),
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),
}

/// A failed load, tagged with the identifier exactly as the caller passed it.
#[derive(Error, Debug)]
#[error("could not load image from {identifier}: {kind}")]
pub struct LoadError {
    identifier: String,
    #[source]
    kind: LoadErrorKind,
}

impl LoadError {
    pub fn new(identifier: impl Into<String>, kind: LoadErrorKind) -> Self {
        Self {
            identifier: identifier.into(),
            kind,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn kind(&self) -> &LoadErrorKind {
        &self.kind
    }
}

/// Resolves an identifier (path or URL) to a decoded raster.
///
/// One attempt per call; implementations never retry. Sources are shared by
/// reference across batch workers, hence `Send + Sync`.
pub trait ImageSource: Send + Sync {
    fn load(&self, identifier: &str) -> Result<RasterImage, LoadError>;
}
