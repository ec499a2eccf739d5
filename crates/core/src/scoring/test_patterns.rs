//! Synthetic images for exercising the scorer.

use crate::scoring::laplacian::reflect;
use crate::shared::raster::GrayscaleImage;

/// `size`x`size` grid of `sin(2πx)·sin(2πy)·255` over one cycle.
///
/// Values are truncated to integers and wrapped into `u8`, so negative lobes
/// land near 255 and the zero crossings become hard edges.
pub fn sinusoid_grid(size: u32) -> GrayscaleImage {
    let n = size as usize;
    let step = 1.0 / (n.max(2) - 1) as f64;
    let mut data = Vec::with_capacity(n * n);
    for row in 0..n {
        let yy = (2.0 * std::f64::consts::PI * row as f64 * step).sin();
        for col in 0..n {
            let xx = (2.0 * std::f64::consts::PI * col as f64 * step).sin();
            data.push((xx * yy * 255.0) as i32 as u8);
        }
    }
    GrayscaleImage::new(data, size, size)
}

/// 1D Gaussian kernel; sigma follows the `0.3 * ((k - 1) / 2 - 1) + 0.8` rule
/// used when no explicit sigma is given.
pub fn gaussian_kernel_1d(kernel_size: usize) -> Vec<f64> {
    debug_assert!(kernel_size >= 1 && kernel_size % 2 == 1);
    let sigma = 0.3 * ((kernel_size as f64 - 1.0) * 0.5 - 1.0) + 0.8;
    let half = (kernel_size / 2) as f64;
    let mut kernel: Vec<f64> = (0..kernel_size)
        .map(|i| {
            let x = i as f64 - half;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f64 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}

/// Separable Gaussian smoothing with reflected borders.
pub fn gaussian_blur(image: &GrayscaleImage, kernel_size: usize) -> GrayscaleImage {
    let (width, height) = (image.width() as usize, image.height() as usize);
    if kernel_size <= 1 || width == 0 || height == 0 {
        return image.clone();
    }
    let kernel = gaussian_kernel_1d(kernel_size);
    let half = (kernel_size / 2) as isize;
    let data = image.data();

    // Horizontal pass: data → temp
    let mut temp = vec![0.0f64; width * height];
    for y in 0..height {
        for x in 0..width {
            temp[y * width + x] = kernel
                .iter()
                .enumerate()
                .map(|(k, &w)| {
                    let sx = reflect(x as isize + k as isize - half, width);
                    data[y * width + sx] as f64 * w
                })
                .sum();
        }
    }

    // Vertical pass: temp → out
    let mut out = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let sum: f64 = kernel
                .iter()
                .enumerate()
                .map(|(k, &w)| {
                    let sy = reflect(y as isize + k as isize - half, height);
                    temp[sy * width + x] * w
                })
                .sum();
            out[y * width + x] = sum.round().clamp(0.0, 255.0) as u8;
        }
    }
    GrayscaleImage::new(out, image.width(), image.height())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_sums_to_one() {
        let sum: f64 = gaussian_kernel_1d(15).iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_kernel_is_symmetric() {
        let k = gaussian_kernel_1d(7);
        for i in 0..k.len() / 2 {
            assert!((k[i] - k[k.len() - 1 - i]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_blur_uniform_image_unchanged() {
        let image = GrayscaleImage::new(vec![128u8; 100], 10, 10);
        let blurred = gaussian_blur(&image, 5);
        assert!(blurred.data().iter().all(|&v| v == 128));
    }

    #[test]
    fn test_sinusoid_grid_dimensions() {
        let grid = sinusoid_grid(100);
        assert_eq!((grid.width(), grid.height()), (100, 100));
        // First row and column sit on a zero crossing.
        assert_eq!(grid.data()[0], 0);
    }
}
