//! LPQA color space implementation
//!
//! Decorrelating the color channels before the transform lets the chroma
//! channels get away with a much coarser grid than luminance.

use thumbhash_core::RGBA_CHANNELS;

/// Alpha-weighted mean color of an RGBA buffer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    /// Sum of the normalized alpha of every pixel
    pub alpha_mass: f64,
}

impl AverageColor {
    /// Whether at least one pixel is not fully opaque
    pub fn has_alpha(&self, pixel_count: usize) -> bool {
        self.alpha_mass < pixel_count as f64
    }
}

/// Compute the alpha-weighted average color of an RGBA8 buffer
///
/// A fully transparent buffer has no alpha mass to normalize by, and
/// averages to black.
pub fn average_color(pixels: &[u8]) -> AverageColor {
    let mut avg = AverageColor {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        alpha_mass: 0.0,
    };

    for px in pixels.chunks_exact(RGBA_CHANNELS) {
        let a = px[3] as f64 / 255.0;
        avg.r += a / 255.0 * px[0] as f64;
        avg.g += a / 255.0 * px[1] as f64;
        avg.b += a / 255.0 * px[2] as f64;
        avg.alpha_mass += a;
    }

    if avg.alpha_mass > 0.0 {
        avg.r /= avg.alpha_mass;
        avg.g /= avg.alpha_mass;
        avg.b /= avg.alpha_mass;
    }

    avg
}

/// Convert normalized RGB to `(l, p, q)`
#[inline]
pub fn rgb_to_lpq(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let l = (r + g + b) / 3.0;
    let p = (r + g) / 2.0 - b;
    let q = r - g;
    (l, p, q)
}

/// Convert `(l, p, q)` back to RGB; the result is not clamped
#[inline]
pub fn lpq_to_rgb(l: f64, p: f64, q: f64) -> (f64, f64, f64) {
    let b = l - 2.0 / 3.0 * p;
    let r = (3.0 * l - b + q) / 2.0;
    let g = r - q;
    (r, g, b)
}

/// Convert an RGBA8 buffer into four LPQA planes
///
/// Translucent pixels are blended toward `avg` in proportion to their
/// transparency, so hidden color under low alpha does not leak into the
/// chroma channels.
pub fn rgba_buffer_to_lpqa(
    pixels: &[u8],
    avg: &AverageColor,
    l: &mut [f64],
    p: &mut [f64],
    q: &mut [f64],
    a: &mut [f64],
) {
    let pixel_count = pixels.len() / RGBA_CHANNELS;
    assert_eq!(l.len(), pixel_count);
    assert_eq!(p.len(), pixel_count);
    assert_eq!(q.len(), pixel_count);
    assert_eq!(a.len(), pixel_count);

    for (i, px) in pixels.chunks_exact(RGBA_CHANNELS).enumerate() {
        let alpha = px[3] as f64 / 255.0;

        let r = avg.r * (1.0 - alpha) + alpha / 255.0 * px[0] as f64;
        let g = avg.g * (1.0 - alpha) + alpha / 255.0 * px[1] as f64;
        let b = avg.b * (1.0 - alpha) + alpha / 255.0 * px[2] as f64;

        let (pl, pp, pq) = rgb_to_lpq(r, g, b);
        l[i] = pl;
        p[i] = pp;
        q[i] = pq;
        a[i] = alpha;
    }
}

/// Convert a reconstructed LPQA sample to an RGBA8 pixel
///
/// Color is clamped, scaled by the clamped alpha and truncated; alpha
/// itself is rounded.
#[inline]
pub fn lpqa_to_rgba8(l: f64, p: f64, q: f64, a: f64) -> [u8; 4] {
    let (r, g, b) = lpq_to_rgb(l, p, q);
    let a = a.clamp(0.0, 1.0);

    [
        (r.clamp(0.0, 1.0) * 255.0 * a) as u8,
        (g.clamp(0.0, 1.0) * 255.0 * a) as u8,
        (b.clamp(0.0, 1.0) * 255.0 * a) as u8,
        (a * 255.0).round() as u8,
    ]
}
