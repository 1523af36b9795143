//! Core types and utilities for the ThumbHash codec
//!
//! This crate provides the fundamental data structures shared by every stage of
//! the pipeline: pixel buffers, coefficient grids, the error type and the
//! scratch buffer pool.

pub mod buffer_pool;
pub mod consts;
pub mod error;
pub mod image;
pub mod types;

pub use buffer_pool::{BufferPool, BufferPoolStats, PooledBuffer};
pub use error::{ThumbHashError, ThumbHashResult};
pub use image::*;
pub use types::*;
