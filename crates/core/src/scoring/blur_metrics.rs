use serde::Serialize;

/// Outcome of scoring one image against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlurMetrics {
    pub is_blurry: bool,
    #[serde(rename = "blur_score")]
    pub score: f64,
    pub blur_percentage: f64,
}

impl BlurMetrics {
    /// Classifies `score` against `threshold`.
    ///
    /// `is_blurry` is a strict `score < threshold`. The percentage falls
    /// linearly from 100 at a score of 0 to 0 at twice the threshold, clamped
    /// outside that range.
    pub fn from_score(score: f64, threshold: f64) -> Self {
        Self {
            is_blurry: score < threshold,
            score,
            blur_percentage: blur_percentage(score, threshold),
        }
    }
}

fn blur_percentage(score: f64, threshold: f64) -> f64 {
    let max_score = threshold * 2.0;
    if max_score == 0.0 {
        // Zero scale: only a perfectly flat image counts as fully blurred.
        return if score <= 0.0 { 100.0 } else { 0.0 };
    }
    ((1.0 - score / max_score) * 100.0).clamp(0.0, 100.0)
}
