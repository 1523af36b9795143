//! ThumbHash decoder implementation

pub mod reconstruct;

use thumbhash_color::lpq_to_rgb;
use thumbhash_core::consts::{DEFAULT_BASE_SIZE, DEFAULT_SATURATION_BOOST, MAX_BASE_SIZE};
use thumbhash_core::*;
use thumbhash_headers::{HashHeader, PackedHash};
use thumbhash_transform::{
    dequantize_ac, dequantize_signed, dequantize_unit, ChannelCoefficients, HashCoefficients,
};

pub use reconstruct::reconstruct;
pub use thumbhash_headers::size_for;

/// Decoder options
#[derive(Debug, Clone)]
pub struct DecoderOptions {
    /// Larger side of the output image, in pixels
    pub base_size: u32,
    /// Multiplier on the chroma AC scales
    ///
    /// Quantization tends to wash colors out; boosting P and Q compensates.
    /// Luminance and alpha are never boosted.
    pub saturation_boost: f64,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            base_size: DEFAULT_BASE_SIZE,
            saturation_boost: DEFAULT_SATURATION_BOOST,
        }
    }
}

impl DecoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_size(mut self, base_size: u32) -> Self {
        self.base_size = base_size;
        self
    }

    pub fn saturation_boost(mut self, saturation_boost: f64) -> Self {
        self.saturation_boost = saturation_boost;
        self
    }

    pub fn validate(&self) -> ThumbHashResult<()> {
        if self.base_size == 0 || self.base_size > MAX_BASE_SIZE {
            return Err(ThumbHashError::InvalidParameter(format!(
                "base size must be between 1 and {}, got {}",
                MAX_BASE_SIZE, self.base_size
            )));
        }
        if !self.saturation_boost.is_finite() || self.saturation_boost < 0.0 {
            return Err(ThumbHashError::InvalidParameter(format!(
                "saturation boost must be a non-negative number, got {}",
                self.saturation_boost
            )));
        }
        Ok(())
    }
}

/// ThumbHash decoder
#[derive(Debug, Clone, Default)]
pub struct HashDecoder {
    options: DecoderOptions,
}

impl HashDecoder {
    pub fn new(options: DecoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Expand a hash into a placeholder image
    pub fn decode(&self, bytes: &[u8]) -> ThumbHashResult<RgbaImage> {
        self.options.validate()?;

        let packed = PackedHash::from_bytes(bytes)?;
        let size = packed.header.size(self.options.base_size);
        let coeffs = dequantize(&packed, self.options.saturation_boost);

        let image = reconstruct(&coeffs, size)?;

        log::debug!(
            "decoded {} byte hash (alpha: {}) into {}x{} image",
            bytes.len(),
            coeffs.has_alpha(),
            size.width,
            size.height
        );

        Ok(image)
    }
}

/// Turn quantized fields back into coefficient sets
///
/// AC terms come back as signed amplitudes. The chroma scales are
/// multiplied by `saturation_boost`.
pub fn dequantize(packed: &PackedHash, saturation_boost: f64) -> HashCoefficients {
    let header = &packed.header;
    let (lx, ly) = header.luminance_extent();

    let l_scale = dequantize_unit(header.l_scale, 31);
    let p_scale = dequantize_unit(header.p_scale, 63);
    let q_scale = dequantize_unit(header.q_scale, 63);

    let a = header.alpha.map(|alpha| {
        let scale = dequantize_unit(alpha.scale, 15);
        channel(dequantize_unit(alpha.dc, 15), &packed.a_ac, scale, scale)
    });

    HashCoefficients {
        is_landscape: header.is_landscape,
        lx,
        ly,
        l: channel(
            dequantize_unit(header.l_dc, 63),
            &packed.l_ac,
            l_scale,
            l_scale,
        ),
        p: channel(
            dequantize_signed(header.p_dc),
            &packed.p_ac,
            p_scale,
            p_scale * saturation_boost,
        ),
        q: channel(
            dequantize_signed(header.q_dc),
            &packed.q_ac,
            q_scale,
            q_scale * saturation_boost,
        ),
        a,
    }
}

fn channel(dc: f64, nibbles: &[u8], scale: f64, effective_scale: f64) -> ChannelCoefficients {
    ChannelCoefficients {
        dc,
        ac: nibbles
            .iter()
            .map(|&n| dequantize_ac(n, effective_scale))
            .collect(),
        scale,
    }
}

/// Decode a hash with the given options
pub fn decode(bytes: &[u8], options: &DecoderOptions) -> ThumbHashResult<RgbaImage> {
    HashDecoder::new(options.clone()).decode(bytes)
}

/// Parse only the header of a hash
pub fn decode_header(bytes: &[u8]) -> ThumbHashResult<HashHeader> {
    HashHeader::from_bytes(bytes)
}

/// Width to height ratio of the image a hash was computed from
pub fn approximate_aspect_ratio(bytes: &[u8]) -> ThumbHashResult<f64> {
    decode_header(bytes).map(|header| header.aspect_ratio())
}

/// Average color of a hash as normalized RGBA
///
/// This is the DC term of every channel, available without evaluating the
/// AC terms.
pub fn average_rgba(bytes: &[u8]) -> ThumbHashResult<[f64; 4]> {
    let header = decode_header(bytes)?;

    let l = dequantize_unit(header.l_dc, 63);
    let p = dequantize_signed(header.p_dc);
    let q = dequantize_signed(header.q_dc);
    let a = header
        .alpha
        .map_or(1.0, |alpha| dequantize_unit(alpha.dc, 15));

    let (r, g, b) = lpq_to_rgb(l, p, q);
    Ok([
        r.clamp(0.0, 1.0),
        g.clamp(0.0, 1.0),
        b.clamp(0.0, 1.0),
        a,
    ])
}
