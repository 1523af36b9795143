//! Color space transformations for ThumbHash
//!
//! This crate implements the conversions between 8-bit RGBA and the LPQA
//! channel basis:
//! - L: luminance
//! - P: yellow minus blue
//! - Q: red minus green
//! - A: alpha

pub mod lpqa;

pub use lpqa::*;
