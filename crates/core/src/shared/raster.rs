use ndarray::ArrayView2;

/// A decoded raster: contiguous 8-bit samples in row-major order.
///
/// Color rasters carry three interleaved channels in RGB order; grayscale
/// sources decode straight to a single channel.
#[derive(Clone, Debug)]
pub struct RasterImage {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
}

impl RasterImage {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Consumes the raster, handing back its sample buffer.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

/// Single-channel intensity image with the same dimensions as its source.
#[derive(Clone, Debug)]
pub struct GrayscaleImage {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl GrayscaleImage {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize),
            "data length must equal width * height"
        );
        Self {
            data,
            width,
            height,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// View as a `(height, width)` array.
    pub fn as_ndarray(&self) -> ArrayView2<'_, u8> {
        ArrayView2::from_shape((self.height as usize, self.width as usize), &self.data)
            .expect("GrayscaleImage data length must match dimensions")
    }
}
