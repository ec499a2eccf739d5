use crate::shared::raster::RasterImage;
use crate::source::domain::image_source::{ImageSource, LoadError};
use crate::source::infrastructure::file_image_source::FileImageSource;
use crate::source::infrastructure::http_image_source::HttpImageSource;

const URL_PREFIXES: &[&str] = &["http://", "https://"];

/// Routes `http(s)://` identifiers to the network and everything else to disk.
pub struct AutoImageSource {
    file: FileImageSource,
    http: HttpImageSource,
}

impl AutoImageSource {
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self::with_http(HttpImageSource::new()?))
    }

    pub fn with_http(http: HttpImageSource) -> Self {
        Self {
            file: FileImageSource::new(),
            http,
        }
    }
}

/// True when the identifier starts with a supported URL scheme (case-insensitive).
pub fn is_url(identifier: &str) -> bool {
    URL_PREFIXES.iter().any(|prefix| {
        identifier
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

impl ImageSource for AutoImageSource {
    fn load(&self, identifier: &str) -> Result<RasterImage, LoadError> {
        if is_url(identifier) {
            self.http.load(identifier)
        } else {
            self.file.load(identifier)
        }
    }
}
