use serde::Serialize;
use thiserror::Error;

use crate::scoring::blur_metrics::BlurMetrics;
use crate::scoring::blur_scorer::score;
use crate::scoring::grayscale::{to_gray, UnsupportedFormatError};
use crate::shared::constants::DEFAULT_THRESHOLD;
use crate::shared::raster::RasterImage;
use crate::source::domain::image_source::{ImageSource, LoadError};

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormatError),
}

/// Metrics for one identifier, serialised flat next to its path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlurReport {
    pub path: String,
    #[serde(flatten)]
    pub metrics: BlurMetrics,
}

/// Single-image pipeline: load → grayscale → Laplacian variance → classify.
///
/// The threshold is fixed at construction.
pub struct BlurDetector {
    source: Box<dyn ImageSource>,
    threshold: f64,
}

impl BlurDetector {
    pub fn new(source: Box<dyn ImageSource>, threshold: f64) -> Self {
        Self { source, threshold }
    }

    pub fn with_default_threshold(source: Box<dyn ImageSource>) -> Self {
        Self::new(source, DEFAULT_THRESHOLD)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Scores an image that is already in memory.
    pub fn compute_metrics(
        &self,
        image: RasterImage,
    ) -> Result<BlurMetrics, UnsupportedFormatError> {
        let gray = to_gray(image)?;
        Ok(score(&gray, self.threshold))
    }

    /// Loads and scores the image behind `identifier`.
    pub fn process(&self, identifier: &str) -> Result<BlurReport, ProcessError> {
        let image = self.source.load(identifier)?;
        let metrics = self.compute_metrics(image)?;
        log::debug!(
            "{identifier}: score={:.2} blurry={}",
            metrics.score,
            metrics.is_blurry
        );
        Ok(BlurReport {
            path: identifier.to_string(),
            metrics,
        })
    }
}
