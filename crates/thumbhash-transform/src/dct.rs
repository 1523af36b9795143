//! Cosine transform over triangular coefficient grids
//!
//! Unlike a block DCT this evaluates a handful of basis functions across the
//! whole image at once, producing one small coefficient set per channel.

use crate::ChannelCoefficients;
use std::f64::consts::PI;
use thumbhash_core::Grid;

/// Forward transform of one channel plane
///
/// Computes the DC and AC terms of `grid` over a `width` x `height` plane,
/// then normalizes the AC terms to `[0, 1]` by their largest magnitude.
pub fn encode_channel(
    channel: &[f64],
    width: usize,
    height: usize,
    grid: Grid,
) -> ChannelCoefficients {
    assert_eq!(channel.len(), width * height);

    let wf = width as f64;
    let hf = height as f64;
    let pixel_count = (width * height) as f64;

    let mut dc = 0.0;
    let mut ac = Vec::with_capacity(grid.ac_count());
    let mut scale = 0.0f64;
    let mut fx = vec![0.0; width];

    for (cx, cy) in grid.terms() {
        let cxf = cx as f64;
        let cyf = cy as f64;

        for (x, f) in fx.iter_mut().enumerate() {
            *f = (PI / wf * cxf * (x as f64 + 0.5)).cos();
        }

        let mut sum = 0.0;
        for (y, row) in channel.chunks_exact(width).enumerate() {
            let fy = (PI / hf * cyf * (y as f64 + 0.5)).cos();
            for (value, f) in row.iter().zip(&fx) {
                sum += value * f * fy;
            }
        }
        sum /= pixel_count;

        if cx > 0 || cy > 0 {
            ac.push(sum);
            scale = scale.max(sum.abs());
        } else {
            dc = sum;
        }
    }

    if scale > 0.0 {
        for v in ac.iter_mut() {
            *v = 0.5 + 0.5 / scale * *v;
        }
    }

    log::trace!(
        "channel {}x{} grid {}x{}: dc={:.4} scale={:.4} terms={}",
        width,
        height,
        grid.nx,
        grid.ny,
        dc,
        scale,
        ac.len()
    );

    ChannelCoefficients { dc, ac, scale }
}

/// Precomputed cosine basis along one axis of the output image
///
/// Row `i` holds `cos(pi / extent * (i + 0.5) * c)` for every frequency `c`
/// below `frequencies`.
#[derive(Debug, Clone)]
pub struct CosineTable {
    values: Vec<f64>,
    frequencies: usize,
}

impl CosineTable {
    pub fn new(extent: usize, frequencies: usize) -> Self {
        let ef = extent as f64;
        let mut values = Vec::with_capacity(extent * frequencies);
        for i in 0..extent {
            let pos = i as f64 + 0.5;
            for c in 0..frequencies {
                values.push((PI / ef * pos * c as f64).cos());
            }
        }
        Self {
            values,
            frequencies,
        }
    }

    pub fn frequencies(&self) -> usize {
        self.frequencies
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.frequencies..(i + 1) * self.frequencies]
    }
}

/// Inverse transform of one channel at a single output position
///
/// `fx` and `fy` are the basis rows for the pixel; `coeffs.ac` must hold
/// signed amplitudes in the visit order of `grid`.
#[inline]
pub fn evaluate_channel(coeffs: &ChannelCoefficients, grid: Grid, fx: &[f64], fy: &[f64]) -> f64 {
    let mut value = coeffs.dc;
    for ((cx, cy), ac) in grid.ac_terms().zip(&coeffs.ac) {
        value += ac * fx[cx] * (fy[cy] * 2.0);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use thumbhash_core::CHROMA_GRID;

    #[test]
    fn test_constant_channel() {
        let channel = vec![0.25; 6 * 4];
        let coeffs = encode_channel(&channel, 6, 4, CHROMA_GRID);

        assert!((coeffs.dc - 0.25).abs() < 1e-12);
        assert_eq!(coeffs.ac.len(), CHROMA_GRID.ac_count());
        // Cosines of a constant average out to float noise only
        assert!(coeffs.scale < 1e-12);
    }

    #[test]
    fn test_horizontal_ramp_is_first_ac_term() {
        let width = 8;
        let height = 4;
        let channel: Vec<f64> = (0..width * height)
            .map(|i| (i % width) as f64 / (width - 1) as f64)
            .collect();

        let coeffs = encode_channel(&channel, width, height, CHROMA_GRID);

        assert!((coeffs.dc - 0.5).abs() < 1e-12);
        assert!(coeffs.scale > 0.1);
        // (1, 0) carries the ramp; it dominates with negative sign, so it
        // normalizes to the bottom of the range
        assert!(coeffs.ac[0].abs() < 1e-12);
        // A purely horizontal signal has no (0, 1) component
        assert!((coeffs.ac[2] - 0.5).abs() < 1e-9);
        for v in &coeffs.ac {
            assert!(*v > -1e-12 && *v < 1.0 + 1e-12, "out of range: {}", v);
        }
    }

    #[test]
    fn test_single_pixel() {
        let coeffs = encode_channel(&[0.75], 1, 1, Grid::new(3, 3));
        assert!((coeffs.dc - 0.75).abs() < 1e-12);
        assert_eq!(coeffs.ac.len(), 5);
    }

    #[test]
    fn test_cosine_table_rows() {
        let table = CosineTable::new(4, 3);
        assert_eq!(table.frequencies(), 3);
        for i in 0..4 {
            assert_eq!(table.row(i)[0], 1.0);
        }
        // Frequency 1 is antisymmetric around the center
        assert!((table.row(0)[1] + table.row(3)[1]).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_recovers_dc_only() {
        let coeffs = ChannelCoefficients {
            dc: 0.3,
            ac: vec![0.0; 5],
            scale: 0.0,
        };
        let table = CosineTable::new(5, 3);
        let value = evaluate_channel(&coeffs, CHROMA_GRID, table.row(2), table.row(1));
        assert!((value - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_forward_then_evaluate_tracks_signal() {
        let width = 16;
        let height = 16;
        let channel: Vec<f64> = (0..width * height)
            .map(|i| {
                let x = (i % width) as f64 / width as f64;
                0.2 + 0.6 * x
            })
            .collect();

        let grid = Grid::new(5, 5);
        let mut coeffs = encode_channel(&channel, width, height, grid);
        // Undo the normalization to get signed amplitudes back
        for v in coeffs.ac.iter_mut() {
            *v = (*v - 0.5) * 2.0 * coeffs.scale;
        }

        let tx = CosineTable::new(width, 5);
        let ty = CosineTable::new(height, 5);
        let left = evaluate_channel(&coeffs, grid, tx.row(0), ty.row(8));
        let right = evaluate_channel(&coeffs, grid, tx.row(15), ty.row(8));
        assert!(left < 0.3, "left edge {}", left);
        assert!(right > 0.7, "right edge {}", right);
    }
}
