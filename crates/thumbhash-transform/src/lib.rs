//! Transform operations for ThumbHash
//!
//! This crate implements the cosine transform over triangular coefficient
//! grids, the scalar quantization formulas of the packed format, and input
//! downscaling.

pub mod coefficients;
pub mod dct;
pub mod quantization;
pub mod resample;

pub use coefficients::*;
pub use dct::*;
pub use quantization::*;
pub use resample::*;
