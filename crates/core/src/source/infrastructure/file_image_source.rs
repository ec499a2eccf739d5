use std::fs;

use crate::shared::raster::RasterImage;
use crate::source::domain::image_source::{ImageSource, LoadError, LoadErrorKind};
use crate::source::infrastructure::image_decoder;

/// Loads images from the local filesystem.
///
/// The format is detected from file contents, not the extension.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileImageSource;

impl FileImageSource {
    pub fn new() -> Self {
        Self
    }
}

impl ImageSource for FileImageSource {
    fn load(&self, identifier: &str) -> Result<RasterImage, LoadError> {
        let bytes =
            fs::read(identifier).map_err(|e| LoadError::new(identifier, LoadErrorKind::Io(e)))?;
        image_decoder::decode(&bytes)
            .map_err(|e| LoadError::new(identifier, LoadErrorKind::Decode(e)))
    }
}
