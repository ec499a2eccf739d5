use thiserror::Error;

use crate::shared::raster::{GrayscaleImage, RasterImage};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unsupported channel layout: expected 1 or 3 channels, got {channels}")]
pub struct UnsupportedFormatError {
    pub channels: u8,
}

// ITU-R BT.601 luma weights (0.299, 0.587, 0.114) in 14-bit fixed point.
const LUMA_SHIFT: u32 = 14;
const R_WEIGHT: u32 = 4899;
const G_WEIGHT: u32 = 9617;
const B_WEIGHT: u32 = 1868;
const ROUNDING: u32 = 1 << (LUMA_SHIFT - 1);

/// Reduces a raster to one intensity channel.
///
/// Single-channel input is passed through without copying.
pub fn to_gray(image: RasterImage) -> Result<GrayscaleImage, UnsupportedFormatError> {
    let (width, height) = (image.width(), image.height());
    match image.channels() {
        1 => Ok(GrayscaleImage::new(image.into_data(), width, height)),
        3 => {
            let gray = image
                .data()
                .chunks_exact(3)
                .map(|px| luma(px[0], px[1], px[2]))
                .collect();
            Ok(GrayscaleImage::new(gray, width, height))
        }
        channels => Err(UnsupportedFormatError { channels }),
    }
}

fn luma(r: u8, g: u8, b: u8) -> u8 {
    let weighted = r as u32 * R_WEIGHT + g as u32 * G_WEIGHT + b as u32 * B_WEIGHT;
    ((weighted + ROUNDING) >> LUMA_SHIFT) as u8
}
