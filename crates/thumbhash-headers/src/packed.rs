//! Integer-level hash: header plus AC nibbles

use crate::HashHeader;
use thumbhash_bitstream::{BitReader, BitWriter};
use thumbhash_core::{Grid, ThumbHashError, ThumbHashResult, ALPHA_GRID, CHROMA_GRID};

/// A fully quantized hash, one step away from bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedHash {
    pub header: HashHeader,
    pub l_ac: Vec<u8>,
    pub p_ac: Vec<u8>,
    pub q_ac: Vec<u8>,
    /// Empty when the header has no alpha
    pub a_ac: Vec<u8>,
}

impl PackedHash {
    /// Parse a hash from its byte representation
    ///
    /// Fails with [`ThumbHashError::InvalidHash`] when the header or any AC
    /// nibble lies past the end of `bytes`. Trailing bytes are ignored.
    pub fn from_bytes(bytes: &[u8]) -> ThumbHashResult<Self> {
        let mut reader = BitReader::new(bytes);

        let header = HashHeader::parse(&mut reader).map_err(|e| truncated(e, "header", bytes))?;

        let l_ac = read_channel(&mut reader, header.luminance_grid(), "luminance", bytes)?;
        let p_ac = read_channel(&mut reader, CHROMA_GRID, "P", bytes)?;
        let q_ac = read_channel(&mut reader, CHROMA_GRID, "Q", bytes)?;
        let a_ac = if header.has_alpha() {
            read_channel(&mut reader, ALPHA_GRID, "alpha", bytes)?
        } else {
            Vec::new()
        };

        Ok(Self {
            header,
            l_ac,
            p_ac,
            q_ac,
            a_ac,
        })
    }

    /// Serialize to bytes, padding the final nibble with zero
    pub fn to_bytes(&self) -> ThumbHashResult<Vec<u8>> {
        let mut writer = BitWriter::with_capacity(self.byte_len());
        self.header.write(&mut writer)?;

        for &nibble in self.ac_nibbles() {
            writer.write_nibble(nibble)?;
        }

        Ok(writer.into_bytes())
    }

    /// All AC nibbles in stream order
    pub fn ac_nibbles(&self) -> impl Iterator<Item = &u8> {
        self.l_ac
            .iter()
            .chain(&self.p_ac)
            .chain(&self.q_ac)
            .chain(&self.a_ac)
    }

    pub fn ac_count(&self) -> usize {
        self.l_ac.len() + self.p_ac.len() + self.q_ac.len() + self.a_ac.len()
    }

    /// Encoded size in bytes
    pub fn byte_len(&self) -> usize {
        self.header.byte_len() + (self.ac_count() + 1) / 2
    }
}

fn read_channel(
    reader: &mut BitReader<'_>,
    grid: Grid,
    channel: &str,
    bytes: &[u8],
) -> ThumbHashResult<Vec<u8>> {
    (0..grid.ac_count())
        .map(|_| reader.read_nibble())
        .collect::<ThumbHashResult<Vec<u8>>>()
        .map_err(|e| truncated(e, channel, bytes))
}

pub(crate) fn truncated(err: ThumbHashError, section: &str, bytes: &[u8]) -> ThumbHashError {
    match err {
        ThumbHashError::UnexpectedEnd => ThumbHashError::InvalidHash(format!(
            "{} truncated ({} bytes)",
            section,
            bytes.len()
        )),
        other => other,
    }
}
