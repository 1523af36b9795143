//! Core types for ThumbHash

use crate::consts::{LUMINANCE_LIMIT_ALPHA, LUMINANCE_LIMIT_OPAQUE};

/// Image dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    pub fn max_side(&self) -> u32 {
        self.width.max(self.height)
    }
}

/// Bounds of a triangular frequency grid
///
/// A term `(cx, cy)` belongs to the grid when `cx * ny < nx * (ny - cy)`.
/// This keeps a diagonal slice of the low frequencies, slightly favouring
/// the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    pub nx: usize,
    pub ny: usize,
}

/// Grid shared by the two chroma channels
pub const CHROMA_GRID: Grid = Grid::new(3, 3);

/// Grid of the alpha channel
pub const ALPHA_GRID: Grid = Grid::new(5, 5);

impl Grid {
    pub const fn new(nx: usize, ny: usize) -> Self {
        Self { nx, ny }
    }

    pub fn contains(&self, cx: usize, cy: usize) -> bool {
        cy < self.ny && cx * self.ny < self.nx * (self.ny - cy)
    }

    /// All terms in visit order: increasing `cy`, then `cx`, DC first
    pub fn terms(&self) -> impl Iterator<Item = (usize, usize)> {
        let Grid { nx, ny } = *self;
        (0..ny).flat_map(move |cy| {
            (0..)
                .take_while(move |&cx| cx * ny < nx * (ny - cy))
                .map(move |cx| (cx, cy))
        })
    }

    /// Terms excluding the DC term
    pub fn ac_terms(&self) -> impl Iterator<Item = (usize, usize)> {
        self.terms().filter(|&term| term != (0, 0))
    }

    pub fn ac_count(&self) -> usize {
        self.ac_terms().count()
    }
}

/// Luminance grid extents `(lx, ly)` for an image of the given size
///
/// The larger side gets the full limit (7, or 5 with alpha) and the smaller
/// one its proportional share, never less than one.
pub fn luminance_extent(dimensions: Dimensions, has_alpha: bool) -> (usize, usize) {
    let limit = if has_alpha {
        LUMINANCE_LIMIT_ALPHA
    } else {
        LUMINANCE_LIMIT_OPAQUE
    } as f64;

    let w = dimensions.width as f64;
    let h = dimensions.height as f64;
    let max_wh = w.max(h);

    let lx = ((limit * w) / max_wh).round() as usize;
    let ly = ((limit * h) / max_wh).round() as usize;

    (lx.max(1), ly.max(1))
}
