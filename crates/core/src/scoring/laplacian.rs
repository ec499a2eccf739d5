use ndarray::Array2;

use crate::shared::raster::GrayscaleImage;

/// Applies the 4-neighbour Laplacian `[0 1 0; 1 -4 1; 0 1 0]`.
///
/// Borders reflect without repeating the edge sample (`dcb|abcd|cba`), so a
/// constant image yields an all-zero response. Output is `f64` to keep the
/// later variance exact on large images.
pub fn laplacian(image: &GrayscaleImage) -> Array2<f64> {
    let src = image.as_ndarray();
    let (h, w) = src.dim();
    Array2::from_shape_fn((h, w), |(y, x)| {
        let at = |yy: isize, xx: isize| src[[reflect(yy, h), reflect(xx, w)]] as f64;
        let (yi, xi) = (y as isize, x as isize);
        at(yi - 1, xi) + at(yi + 1, xi) + at(yi, xi - 1) + at(yi, xi + 1) - 4.0 * at(yi, xi)
    })
}

/// Population variance over every element; 0 for an empty response.
pub fn variance(response: &Array2<f64>) -> f64 {
    if response.is_empty() {
        return 0.0;
    }
    response.var(0.0)
}

/// Mirrors an out-of-range index back inside `0..len`, excluding the edge sample.
pub(crate) fn reflect(i: isize, len: usize) -> usize {
    let n = len as isize;
    if n <= 1 {
        return 0;
    }
    let mut i = i;
    while i < 0 || i >= n {
        if i < 0 {
            i = -i;
        }
        if i >= n {
            i = 2 * n - 2 - i;
        }
    }
    i as usize
}
