//! Scalar quantization of hash fields
//!
//! Every field is stored as `round(factor * value)` in a fixed number of
//! bits. Unsigned fields map `[0, 1]` onto `0..=max`; signed DC terms map
//! `[-1, 1]` onto `0..=63` around a midpoint of 31.5.

/// Quantize a `[0, 1]` value to `0..=max`
#[inline]
pub fn quantize_unit(value: f64, max: u8) -> u8 {
    let max = max as f64;
    (max * value).round().clamp(0.0, max) as u8
}

#[inline]
pub fn dequantize_unit(q: u8, max: u8) -> f64 {
    q as f64 / max as f64
}

/// Quantize a `[-1, 1]` chroma DC value to 6 bits
#[inline]
pub fn quantize_signed(value: f64) -> u8 {
    (31.5 + 31.5 * value).round().clamp(0.0, 63.0) as u8
}

#[inline]
pub fn dequantize_signed(q: u8) -> f64 {
    q as f64 / 31.5 - 1.0
}

/// Quantize a normalized AC term to a nibble
#[inline]
pub fn quantize_ac(value: f64) -> u8 {
    quantize_unit(value, 15)
}

/// Expand a nibble back to a signed amplitude of at most `scale`
#[inline]
pub fn dequantize_ac(nibble: u8, scale: f64) -> f64 {
    (nibble as f64 / 7.5 - 1.0) * scale
}
