pub mod batch_runner;
pub mod blur_detector;
pub mod process_result;
