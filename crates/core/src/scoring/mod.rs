pub mod blur_metrics;
pub mod blur_scorer;
pub mod grayscale;
pub mod laplacian;
#[cfg(test)]
pub(crate) mod test_patterns;
