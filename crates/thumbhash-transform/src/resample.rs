//! Input downscaling
//!
//! Transform cost grows with the pixel count, while the hash only keeps a
//! few low frequencies. Large inputs are box-filtered down so that their
//! larger side fits a fixed limit before hashing.

use thumbhash_core::{Dimensions, RgbaImage, ThumbHashResult, RGBA_CHANNELS};

/// Size an image of `dimensions` is reduced to so its larger side is at
/// most `max_side`, keeping the aspect ratio
pub fn fit_within(dimensions: Dimensions, max_side: u32) -> Dimensions {
    let largest = dimensions.max_side();
    if largest <= max_side || max_side == 0 {
        return dimensions;
    }

    let scale = max_side as f64 / largest as f64;
    let width = ((dimensions.width as f64 * scale).round() as u32).clamp(1, max_side);
    let height = ((dimensions.height as f64 * scale).round() as u32).clamp(1, max_side);
    Dimensions::new(width, height)
}

/// Area-average `image` down to fit within `max_side`
///
/// Returns `None` when the image already fits.
pub fn downscale_to_fit(image: &RgbaImage, max_side: u32) -> ThumbHashResult<Option<RgbaImage>> {
    let src = image.dimensions();
    let dst = fit_within(src, max_side);
    if dst == src {
        return Ok(None);
    }

    let pixels = downscale_pixels(image.as_raw(), src, dst);
    RgbaImage::from_raw(dst.width, dst.height, pixels).map(Some)
}

/// Area-average an RGBA8 buffer of size `src` down to `dst`
///
/// Each output pixel is the rounded mean of the source block it covers.
/// `dst` must not be larger than `src` on either axis.
pub fn downscale_pixels(pixels: &[u8], src: Dimensions, dst: Dimensions) -> Vec<u8> {
    assert_eq!(pixels.len(), src.pixel_count() * RGBA_CHANNELS);
    assert!(dst.width <= src.width && dst.height <= src.height);

    log::debug!(
        "downscaling {}x{} to {}x{}",
        src.width,
        src.height,
        dst.width,
        dst.height
    );

    let x_spans = spans(src.width, dst.width);
    let y_spans = spans(src.height, dst.height);
    let src_width = src.width as usize;

    let mut out = Vec::with_capacity(dst.pixel_count() * RGBA_CHANNELS);
    for &(y0, y1) in &y_spans {
        for &(x0, x1) in &x_spans {
            let mut sum = [0u64; RGBA_CHANNELS];
            for y in y0..y1 {
                let row = y * src_width;
                for x in x0..x1 {
                    let p = (row + x) * RGBA_CHANNELS;
                    for (c, s) in sum.iter_mut().enumerate() {
                        *s += pixels[p + c] as u64;
                    }
                }
            }

            let count = ((y1 - y0) * (x1 - x0)) as u64;
            out.extend(sum.iter().map(|s| ((s + count / 2) / count) as u8));
        }
    }

    out
}

/// Source ranges covered by each destination sample along one axis
fn spans(src: u32, dst: u32) -> Vec<(usize, usize)> {
    let src = src as usize;
    let dst = dst as usize;
    (0..dst)
        .map(|i| {
            let start = i * src / dst;
            let end = ((i + 1) * src / dst).max(start + 1);
            (start, end)
        })
        .collect()
}
