//! Inverse transform and RGBA reconstruction

use rayon::prelude::*;
use thumbhash_color::lpqa_to_rgba8;
use thumbhash_core::*;
use thumbhash_transform::{evaluate_channel, CosineTable, HashCoefficients};

/// Render dequantized coefficients into an RGBA image of `size`
///
/// Rows are evaluated independently on the rayon pool. Each pixel sums the
/// basis functions of every channel over that channel's own grid.
pub fn reconstruct(coeffs: &HashCoefficients, size: Dimensions) -> ThumbHashResult<RgbaImage> {
    let mut image = RgbaImage::new(size.width, size.height)?;
    let width = size.width as usize;
    let height = size.height as usize;

    let l_grid = coeffs.luminance_grid();
    let min_frequencies = if coeffs.has_alpha() {
        ALPHA_GRID.nx
    } else {
        CHROMA_GRID.nx
    };
    let fx_table = CosineTable::new(width, l_grid.nx.max(min_frequencies));
    let fy_table = CosineTable::new(height, l_grid.ny.max(min_frequencies));

    image
        .as_raw_mut()
        .par_chunks_mut(width * RGBA_CHANNELS)
        .enumerate()
        .for_each(|(y, row)| {
            let fy = fy_table.row(y);
            for (x, px) in row.chunks_exact_mut(RGBA_CHANNELS).enumerate() {
                let fx = fx_table.row(x);

                let l = evaluate_channel(&coeffs.l, l_grid, fx, fy);
                let p = evaluate_channel(&coeffs.p, CHROMA_GRID, fx, fy);
                let q = evaluate_channel(&coeffs.q, CHROMA_GRID, fx, fy);
                let a = coeffs
                    .a
                    .as_ref()
                    .map_or(1.0, |a| evaluate_channel(a, ALPHA_GRID, fx, fy));

                px.copy_from_slice(&lpqa_to_rgba8(l, p, q, a));
            }
        });

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use thumbhash_transform::ChannelCoefficients;

    fn flat(dc: f64, terms: usize) -> ChannelCoefficients {
        ChannelCoefficients {
            dc,
            ac: vec![0.0; terms],
            scale: 0.0,
        }
    }

    #[test]
    fn test_flat_color() {
        let coeffs = HashCoefficients {
            is_landscape: false,
            lx: 7,
            ly: 7,
            l: flat(0.5, 27),
            p: flat(0.0, 5),
            q: flat(0.0, 5),
            a: None,
        };

        let image = reconstruct(&coeffs, Dimensions::new(8, 4)).unwrap();
        assert_eq!(image.width(), 8);
        for px in image.as_raw().chunks_exact(4) {
            assert_eq!(px, &[127, 127, 127, 255]);
        }
    }

    #[test]
    fn test_overdriven_values_clamp() {
        let mut l = flat(0.5, 27);
        l.ac.iter_mut().for_each(|v| *v = 40.0);
        let mut a = flat(0.5, 14);
        a.ac.iter_mut().for_each(|v| *v = -40.0);

        let coeffs = HashCoefficients {
            is_landscape: false,
            lx: 5,
            ly: 5,
            l,
            p: flat(3.0, 5),
            q: flat(-3.0, 5),
            a: Some(a),
        };

        // Every byte is produced through a clamp, so this must not panic
        // and alpha must stay within range
        let image = reconstruct(&coeffs, Dimensions::new(6, 6)).unwrap();
        assert_eq!(image.as_raw().len(), 6 * 6 * 4);
        for px in image.as_raw().chunks_exact(4) {
            let alpha = px[3];
            for &c in &px[..3] {
                assert!(c <= alpha, "color {} exceeds alpha {}", c, alpha);
            }
        }
    }
}
