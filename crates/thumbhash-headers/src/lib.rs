//! ThumbHash wire format
//!
//! A hash is a 5-byte header, an optional alpha byte, then a stream of AC
//! nibbles. All fields are little-endian bit fields:
//!
//! | Bits | Field |
//! |------|-------|
//! | 6 | L DC |
//! | 6 | P DC |
//! | 6 | Q DC |
//! | 5 | L scale |
//! | 1 | has alpha |
//! | 3 | L count |
//! | 6 | P scale |
//! | 6 | Q scale |
//! | 1 | is landscape |
//! | 4 | A DC (alpha only) |
//! | 4 | A scale (alpha only) |
//! | 4 each | L, P, Q, then A AC terms |

pub mod packed;

use thumbhash_bitstream::{BitReader, BitWriter};
use thumbhash_core::consts::*;
use thumbhash_core::*;

pub use packed::PackedHash;

/// Alpha fields, present only when the image has transparency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlphaHeader {
    pub dc: u8,
    pub scale: u8,
}

/// Quantized header fields of a hash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HashHeader {
    pub l_dc: u8,
    pub p_dc: u8,
    pub q_dc: u8,
    pub l_scale: u8,
    /// Luminance extent along the shorter axis
    pub l_count: u8,
    pub p_scale: u8,
    pub q_scale: u8,
    pub is_landscape: bool,
    pub alpha: Option<AlphaHeader>,
}

impl HashHeader {
    /// Parse the header fields from the start of a hash
    pub fn parse(reader: &mut BitReader<'_>) -> ThumbHashResult<Self> {
        let l_dc = reader.read_bits(L_DC_BITS)? as u8;
        let p_dc = reader.read_bits(P_DC_BITS)? as u8;
        let q_dc = reader.read_bits(Q_DC_BITS)? as u8;
        let l_scale = reader.read_bits(L_SCALE_BITS)? as u8;
        let has_alpha = reader.read_bit()?;

        let l_count = reader.read_bits(L_COUNT_BITS)? as u8;
        let p_scale = reader.read_bits(P_SCALE_BITS)? as u8;
        let q_scale = reader.read_bits(Q_SCALE_BITS)? as u8;
        let is_landscape = reader.read_bit()?;

        let alpha = if has_alpha {
            let dc = reader.read_bits(A_DC_BITS)? as u8;
            let scale = reader.read_bits(A_SCALE_BITS)? as u8;
            Some(AlphaHeader { dc, scale })
        } else {
            None
        };

        Ok(Self {
            l_dc,
            p_dc,
            q_dc,
            l_scale,
            l_count,
            p_scale,
            q_scale,
            is_landscape,
            alpha,
        })
    }

    /// Parse just the header of a hash
    ///
    /// Fails with [`ThumbHashError::InvalidHash`] when `bytes` is too short
    /// to hold it.
    pub fn from_bytes(bytes: &[u8]) -> ThumbHashResult<Self> {
        let mut reader = BitReader::new(bytes);
        Self::parse(&mut reader).map_err(|e| packed::truncated(e, "header", bytes))
    }

    /// Write the header fields
    pub fn write(&self, writer: &mut BitWriter) -> ThumbHashResult<()> {
        writer.write_bits(self.l_dc as u32, L_DC_BITS)?;
        writer.write_bits(self.p_dc as u32, P_DC_BITS)?;
        writer.write_bits(self.q_dc as u32, Q_DC_BITS)?;
        writer.write_bits(self.l_scale as u32, L_SCALE_BITS)?;
        writer.write_bit(self.has_alpha())?;

        writer.write_bits(self.l_count as u32, L_COUNT_BITS)?;
        writer.write_bits(self.p_scale as u32, P_SCALE_BITS)?;
        writer.write_bits(self.q_scale as u32, Q_SCALE_BITS)?;
        writer.write_bit(self.is_landscape)?;

        if let Some(alpha) = self.alpha {
            writer.write_bits(alpha.dc as u32, A_DC_BITS)?;
            writer.write_bits(alpha.scale as u32, A_SCALE_BITS)?;
        }
        Ok(())
    }

    pub fn has_alpha(&self) -> bool {
        self.alpha.is_some()
    }

    /// Size of the header in bytes
    pub fn byte_len(&self) -> usize {
        if self.has_alpha() {
            HEADER_BYTES + ALPHA_HEADER_BYTES
        } else {
            HEADER_BYTES
        }
    }

    /// Luminance extents `(lx, ly)` encoded by this header
    ///
    /// The stored count belongs to the shorter axis and is raised to at
    /// least 3; the longer axis always has the full limit.
    pub fn luminance_extent(&self) -> (usize, usize) {
        let count = (self.l_count as usize).max(MIN_LUMINANCE_EXTENT);
        let full = if self.has_alpha() {
            LUMINANCE_LIMIT_ALPHA
        } else {
            LUMINANCE_LIMIT_OPAQUE
        };

        if self.is_landscape {
            (full, count)
        } else {
            (count, full)
        }
    }

    /// Luminance grid of the AC nibble stream
    pub fn luminance_grid(&self) -> Grid {
        let (lx, ly) = self.luminance_extent();
        Grid::new(lx, ly)
    }

    /// Grids of every stored channel in nibble order
    pub fn channel_grids(&self) -> Vec<Grid> {
        let mut grids = vec![self.luminance_grid(), CHROMA_GRID, CHROMA_GRID];
        if self.has_alpha() {
            grids.push(ALPHA_GRID);
        }
        grids
    }

    /// Total number of AC nibbles that follow the header
    pub fn ac_count(&self) -> usize {
        self.channel_grids().iter().map(Grid::ac_count).sum()
    }

    /// Width to height ratio of the encoded image
    pub fn aspect_ratio(&self) -> f64 {
        let (lx, ly) = self.luminance_extent();
        lx as f64 / ly as f64
    }

    /// Placeholder dimensions for a given larger-side size
    pub fn size(&self, base_size: u32) -> Dimensions {
        size_for(self, base_size)
    }
}

/// Placeholder dimensions for `header` with the larger side at `base_size`
///
/// The shorter side follows the stored luminance aspect ratio and never
/// drops below one pixel.
pub fn size_for(header: &HashHeader, base_size: u32) -> Dimensions {
    let ratio = header.aspect_ratio();
    let base = base_size as f64;

    if ratio > 1.0 {
        let height = (base / ratio).round() as u32;
        Dimensions::new(base_size, height.max(1))
    } else {
        let width = (base * ratio).round() as u32;
        Dimensions::new(width.max(1), base_size)
    }
}
