use image::DynamicImage;

use crate::shared::raster::RasterImage;

/// Decodes an encoded image (format sniffed from the bytes) into a raster.
pub fn decode(bytes: &[u8]) -> Result<RasterImage, image::ImageError> {
    let decoded = image::load_from_memory(bytes)?;
    Ok(to_raster(decoded))
}

/// Grayscale sources stay single-channel; everything else becomes RGB with
/// any alpha dropped.
fn to_raster(image: DynamicImage) -> RasterImage {
    let (width, height) = (image.width(), image.height());
    match image {
        DynamicImage::ImageLuma8(buf) => RasterImage::new(buf.into_raw(), width, height, 1),
        DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageLumaA16(_) => {
            RasterImage::new(image.to_luma8().into_raw(), width, height, 1)
        }
        DynamicImage::ImageRgb8(buf) => RasterImage::new(buf.into_raw(), width, height, 3),
        other => RasterImage::new(other.to_rgb8().into_raw(), width, height, 3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_png(image: DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_rgb_png_decodes_to_three_channels() {
        let img = image::RgbImage::from_pixel(4, 3, image::Rgb([50, 100, 200]));
        let raster = decode(&encode_png(DynamicImage::ImageRgb8(img))).unwrap();
        assert_eq!(raster.channels(), 3);
        assert_eq!((raster.width(), raster.height()), (4, 3));
        assert_eq!(&raster.data()[..3], &[50, 100, 200]);
    }

    #[test]
    fn test_gray_png_stays_single_channel() {
        let img = image::GrayImage::from_pixel(5, 2, image::Luma([77]));
        let raster = decode(&encode_png(DynamicImage::ImageLuma8(img))).unwrap();
        assert_eq!(raster.channels(), 1);
        assert!(raster.data().iter().all(|&v| v == 77));
    }

    #[test]
    fn test_rgba_drops_alpha() {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 0]));
        let raster = decode(&encode_png(DynamicImage::ImageRgba8(img))).unwrap();
        assert_eq!(raster.channels(), 3);
        assert_eq!(raster.data().len(), 12);
        assert_eq!(&raster.data()[..3], &[10, 20, 30]);
    }

    #[test]
    fn test_garbage_bytes_fail() {
        assert!(decode(b"definitely not an image").is_err());
    }

    #[test]
    fn test_empty_bytes_fail() {
        assert!(decode(&[]).is_err());
    }
}
