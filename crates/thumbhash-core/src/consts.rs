//! Constants used throughout the ThumbHash implementation

/// Larger side of a decoded placeholder, in pixels
pub const DEFAULT_BASE_SIZE: u32 = 32;

/// Chroma scale multiplier applied on decode to counter quantization dulling
pub const DEFAULT_SATURATION_BOOST: f64 = 1.25;

/// Largest accepted decode base size, in pixels
pub const MAX_BASE_SIZE: u32 = 4096;

/// Larger-side cap the CLI applies before hashing unless told to keep full resolution
pub const DEFAULT_MAX_SIDE: u32 = 100;

/// Luminance grid bound for opaque images
pub const LUMINANCE_LIMIT_OPAQUE: usize = 7;

/// Luminance grid bound when the image carries alpha
pub const LUMINANCE_LIMIT_ALPHA: usize = 5;

/// Smallest luminance grid dimension used by the transform
pub const MIN_LUMINANCE_EXTENT: usize = 3;

/// Header sizes
pub const HEADER_BYTES: usize = 5;
pub const ALPHA_HEADER_BYTES: usize = 1;

/// Field widths of the packed header, in bits
pub const L_DC_BITS: usize = 6;
pub const P_DC_BITS: usize = 6;
pub const Q_DC_BITS: usize = 6;
pub const L_SCALE_BITS: usize = 5;
pub const L_COUNT_BITS: usize = 3;
pub const P_SCALE_BITS: usize = 6;
pub const Q_SCALE_BITS: usize = 6;
pub const A_DC_BITS: usize = 4;
pub const A_SCALE_BITS: usize = 4;
pub const AC_BITS: usize = 4;
