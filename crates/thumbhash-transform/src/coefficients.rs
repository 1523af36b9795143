//! Float-level coefficient sets

use thumbhash_core::consts::MIN_LUMINANCE_EXTENT;
use thumbhash_core::Grid;

/// Transform output of a single channel
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelCoefficients {
    /// Zero-frequency term
    pub dc: f64,
    /// Non-zero frequency terms in grid visit order
    ///
    /// After the forward transform these are normalized to `[0, 1]` around
    /// 0.5; after dequantization they are signed amplitudes.
    pub ac: Vec<f64>,
    /// Largest absolute AC amplitude before normalization
    pub scale: f64,
}

/// All coefficient sets of one hash
#[derive(Debug, Clone, PartialEq)]
pub struct HashCoefficients {
    pub is_landscape: bool,
    /// Luminance extents as stored in the hash, before the minimum of 3 is
    /// applied for the transform
    pub lx: usize,
    pub ly: usize,
    pub l: ChannelCoefficients,
    pub p: ChannelCoefficients,
    pub q: ChannelCoefficients,
    pub a: Option<ChannelCoefficients>,
}

impl HashCoefficients {
    pub fn has_alpha(&self) -> bool {
        self.a.is_some()
    }

    /// Grid the luminance channel is transformed over
    pub fn luminance_grid(&self) -> Grid {
        luminance_grid(self.lx, self.ly)
    }
}

/// Luminance transform grid for stored extents
pub fn luminance_grid(lx: usize, ly: usize) -> Grid {
    Grid::new(lx.max(MIN_LUMINANCE_EXTENT), ly.max(MIN_LUMINANCE_EXTENT))
}
