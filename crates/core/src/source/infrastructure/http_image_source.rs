use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Url;

use crate::shared::constants::FETCH_TIMEOUT;
use crate::shared::raster::RasterImage;
use crate::source::domain::image_source::{ImageSource, LoadError, LoadErrorKind};
use crate::source::infrastructure::image_decoder;

/// Fetches images over HTTP(S) with a single bounded GET.
pub struct HttpImageSource {
    client: Client,
    timeout: Duration,
}

impl HttpImageSource {
    /// Builds a source with the default 10 second fetch timeout.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_timeout(FETCH_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, timeout))
    }

    /// Wraps a preconfigured client. `timeout` is only used for reporting;
    /// the client must already enforce it.
    pub fn with_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    fn fetch(&self, url: Url) -> Result<Vec<u8>, LoadErrorKind> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| self.classify(e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadErrorKind::Status(status));
        }
        let body = response.bytes().map_err(|e| self.classify(e))?;
        Ok(body.to_vec())
    }

    fn classify(&self, err: reqwest::Error) -> LoadErrorKind {
        if err.is_timeout() {
            LoadErrorKind::Timeout(self.timeout)
        } else {
            LoadErrorKind::Request(err)
        }
    }
}

/// Accepts only absolute URLs carrying both a scheme and a host.
pub fn validate_url(identifier: &str) -> Result<Url, LoadErrorKind> {
    let url = Url::parse(identifier).map_err(|_| LoadErrorKind::InvalidUrl)?;
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(LoadErrorKind::InvalidUrl),
    }
}

impl ImageSource for HttpImageSource {
    fn load(&self, identifier: &str) -> Result<RasterImage, LoadError> {
        let url = validate_url(identifier).map_err(|kind| LoadError::new(identifier, kind))?;
        log::debug!("Fetching {url}");
        let bytes = self
            .fetch(url)
            .map_err(|kind| LoadError::new(identifier, kind))?;
        image_decoder::decode(&bytes)
            .map_err(|e| LoadError::new(identifier, LoadErrorKind::Decode(e)))
    }
}
