pub mod auto_image_source;
pub mod file_image_source;
pub mod http_image_source;
pub mod image_decoder;
pub mod image_directory;
