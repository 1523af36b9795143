//! # ThumbHash
//!
//! This crate provides a high-level API for computing ThumbHashes: tiny
//! binary fingerprints of an image that expand back into a blurry
//! placeholder while the real image loads.
//!
//! ## Quick Start
//!
//! ```
//! use thumbhash::{decode, encode, DecoderOptions};
//!
//! // A 4x4 opaque orange image
//! let pixels = [255u8, 128, 0, 255].repeat(16);
//! let hash = encode(&pixels, 4, 4).unwrap();
//! assert_eq!(hash.len(), 24);
//!
//! let placeholder = decode(&hash, &DecoderOptions::default()).unwrap();
//! assert_eq!((placeholder.width(), placeholder.height()), (32, 32));
//! ```
//!
//! ## Format
//!
//! A hash is 5 header bytes (6 with alpha) followed by 4-bit AC terms: at
//! most 25 bytes for opaque images. Luminance gets up to 7 frequencies on
//! the longer axis; the two chroma channels get 3; alpha, when present,
//! gets 5. The aspect ratio is implied by the luminance grid, so decoding
//! needs nothing but the bytes.

// Re-export core types
pub use thumbhash_core::{
    consts, BufferPool, BufferPoolStats, Dimensions, Grid, PooledBuffer, RgbaImage,
    ThumbHashError, ThumbHashResult,
};

// Re-export wire format
pub use thumbhash_headers::{AlphaHeader, HashHeader, PackedHash};

// Re-export decoder
pub use thumbhash_decoder::{
    approximate_aspect_ratio, average_rgba, decode, decode_header, size_for, DecoderOptions,
    HashDecoder,
};

// Re-export encoder
pub use thumbhash_encoder::{encode, encode_image, EncoderOptions, HashEncoder};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
