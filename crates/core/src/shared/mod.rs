pub mod constants;
pub mod raster;
