use crate::scoring::blur_metrics::BlurMetrics;
use crate::scoring::laplacian::{laplacian, variance};
use crate::shared::raster::GrayscaleImage;

/// Variance of the Laplacian response: the focus measure.
pub fn focus_measure(image: &GrayscaleImage) -> f64 {
    variance(&laplacian(image))
}

/// Scores a grayscale image and classifies it against `threshold`.
pub fn score(image: &GrayscaleImage, threshold: f64) -> BlurMetrics {
    BlurMetrics::from_score(focus_measure(image), threshold)
}
