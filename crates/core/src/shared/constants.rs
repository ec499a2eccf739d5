use std::time::Duration;

/// Laplacian variance below which an image is reported blurry.
pub const DEFAULT_THRESHOLD: f64 = 130.0;

/// Upper bound on a single HTTP fetch, connect through body.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
