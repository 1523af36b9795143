//! ThumbHash encoder implementation

use thumbhash_color::{average_color, rgba_buffer_to_lpqa};
use thumbhash_core::*;
use thumbhash_headers::{AlphaHeader, HashHeader, PackedHash};
use thumbhash_transform::{
    downscale_pixels, encode_channel, fit_within, luminance_grid, quantize_ac, quantize_signed,
    quantize_unit, ChannelCoefficients, HashCoefficients,
};

/// Encoder options
#[derive(Debug, Clone, Default)]
pub struct EncoderOptions {
    /// Downscale inputs whose larger side exceeds this many pixels
    ///
    /// `None` hashes the image at full resolution, which is what reference
    /// hashes are computed from.
    pub max_side: Option<u32>,
}

impl EncoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_side(mut self, max_side: u32) -> Self {
        self.max_side = Some(max_side.max(1));
        self
    }
}

/// ThumbHash encoder
///
/// Holds a scratch [`BufferPool`] for the channel planes. The default pool
/// is disabled; use [`HashEncoder::with_pool`] and share one encoder across
/// calls (or threads) to recycle buffers.
pub struct HashEncoder {
    options: EncoderOptions,
    pool: BufferPool,
}

impl HashEncoder {
    pub fn new(options: EncoderOptions) -> Self {
        Self::with_pool(options, BufferPool::disabled())
    }

    pub fn with_pool(options: EncoderOptions, pool: BufferPool) -> Self {
        Self { options, pool }
    }

    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    pub fn pool(&self) -> &BufferPool {
        &self.pool
    }

    /// Hash an image
    pub fn encode(&self, image: &RgbaImage) -> ThumbHashResult<Vec<u8>> {
        self.encode_pixels(image.as_raw(), image.dimensions())
    }

    /// Run the color conversion and forward transform without packing
    pub fn analyze(&self, image: &RgbaImage) -> HashCoefficients {
        self.analyze_pixels(image.as_raw(), image.dimensions())
    }

    fn encode_pixels(&self, pixels: &[u8], dimensions: Dimensions) -> ThumbHashResult<Vec<u8>> {
        let coeffs = self.analyze_pixels(pixels, dimensions);
        let bytes = quantize(&coeffs).to_bytes()?;

        log::debug!(
            "encoded {}x{} image (alpha: {}, luminance {}x{}) into {} bytes",
            dimensions.width,
            dimensions.height,
            coeffs.has_alpha(),
            coeffs.lx,
            coeffs.ly,
            bytes.len()
        );

        Ok(bytes)
    }

    fn analyze_pixels(&self, pixels: &[u8], dimensions: Dimensions) -> HashCoefficients {
        let target = match self.options.max_side {
            Some(max_side) => fit_within(dimensions, max_side),
            None => dimensions,
        };

        let scaled;
        let pixels = if target != dimensions {
            scaled = downscale_pixels(pixels, dimensions, target);
            &scaled[..]
        } else {
            pixels
        };

        let width = target.width as usize;
        let height = target.height as usize;
        let pixel_count = target.pixel_count();

        let avg = average_color(pixels);
        let has_alpha = avg.has_alpha(pixel_count);
        let (lx, ly) = luminance_extent(target, has_alpha);

        let mut l = self.pool.checkout(pixel_count);
        let mut p = self.pool.checkout(pixel_count);
        let mut q = self.pool.checkout(pixel_count);
        let mut a = self.pool.checkout(pixel_count);
        rgba_buffer_to_lpqa(pixels, &avg, &mut l, &mut p, &mut q, &mut a);

        let (l, p, q, a) = (&*l, &*p, &*q, &*a);
        let l_grid = luminance_grid(lx, ly);

        // Channels are independent; transform them on the rayon pool
        let ((l, p), (q, a)) = rayon::join(
            || {
                rayon::join(
                    || encode_channel(l, width, height, l_grid),
                    || encode_channel(p, width, height, CHROMA_GRID),
                )
            },
            || {
                rayon::join(
                    || encode_channel(q, width, height, CHROMA_GRID),
                    || has_alpha.then(|| encode_channel(a, width, height, ALPHA_GRID)),
                )
            },
        );

        HashCoefficients {
            is_landscape: target.is_landscape(),
            lx,
            ly,
            l,
            p,
            q,
            a,
        }
    }
}

impl Default for HashEncoder {
    fn default() -> Self {
        Self::new(EncoderOptions::default())
    }
}

/// Quantize transform output into header fields and AC nibbles
pub fn quantize(coeffs: &HashCoefficients) -> PackedHash {
    let l_count = if coeffs.is_landscape {
        coeffs.ly
    } else {
        coeffs.lx
    };

    let header = HashHeader {
        l_dc: quantize_unit(coeffs.l.dc, 63),
        p_dc: quantize_signed(coeffs.p.dc),
        q_dc: quantize_signed(coeffs.q.dc),
        l_scale: quantize_unit(coeffs.l.scale, 31),
        l_count: l_count as u8,
        p_scale: quantize_unit(coeffs.p.scale, 63),
        q_scale: quantize_unit(coeffs.q.scale, 63),
        is_landscape: coeffs.is_landscape,
        alpha: coeffs.a.as_ref().map(|a| AlphaHeader {
            dc: quantize_unit(a.dc, 15),
            scale: quantize_unit(a.scale, 15),
        }),
    };

    PackedHash {
        header,
        l_ac: quantize_channel(&coeffs.l),
        p_ac: quantize_channel(&coeffs.p),
        q_ac: quantize_channel(&coeffs.q),
        a_ac: coeffs.a.as_ref().map(quantize_channel).unwrap_or_default(),
    }
}

fn quantize_channel(coeffs: &ChannelCoefficients) -> Vec<u8> {
    coeffs.ac.iter().map(|&v| quantize_ac(v)).collect()
}

/// Hash a raw RGBA8 buffer of `width` x `height` pixels
///
/// Fails only if the buffer does not match the dimensions.
pub fn encode(pixels: &[u8], width: u32, height: u32) -> ThumbHashResult<Vec<u8>> {
    let dimensions = check_rgba_buffer(width, height, pixels.len())?;
    HashEncoder::default().encode_pixels(pixels, dimensions)
}

/// Hash an image with default options
pub fn encode_image(image: &RgbaImage) -> ThumbHashResult<Vec<u8>> {
    HashEncoder::default().encode(image)
}
