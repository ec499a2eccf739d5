//! Blur detection by variance of the Laplacian.
//!
//! Images are loaded from disk or over HTTP ([`source`]), reduced to one
//! intensity channel and scored ([`scoring`]), then classified against a
//! threshold, singly or in batches ([`pipeline`]).

pub mod pipeline;
pub mod scoring;
pub mod shared;
pub mod source;
