//! Bitstream reader implementation

use thumbhash_core::{ThumbHashError, ThumbHashResult};

/// Reads LSB-first bit fields from a byte slice
pub struct BitReader<'a> {
    data: &'a [u8],
    position: usize,
    buffer: u64,
    bits_in_buffer: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            position: 0,
            buffer: 0,
            bits_in_buffer: 0,
        }
    }

    /// Read up to 32 bits
    ///
    /// Bytes are pulled from the slice only as they are needed, so a read
    /// fails exactly when it would touch a byte past the end.
    pub fn read_bits(&mut self, num_bits: usize) -> ThumbHashResult<u32> {
        if num_bits > 32 {
            return Err(ThumbHashError::InvalidParameter(
                "Cannot read more than 32 bits at once".to_string(),
            ));
        }

        while self.bits_in_buffer < num_bits {
            let byte = *self
                .data
                .get(self.position)
                .ok_or(ThumbHashError::UnexpectedEnd)?;
            self.buffer |= (byte as u64) << self.bits_in_buffer;
            self.bits_in_buffer += 8;
            self.position += 1;
        }

        let mask = (1u64 << num_bits) - 1;
        let result = (self.buffer & mask) as u32;
        self.buffer >>= num_bits;
        self.bits_in_buffer -= num_bits;

        Ok(result)
    }

    /// Read a single bit
    pub fn read_bit(&mut self) -> ThumbHashResult<bool> {
        self.read_bits(1).map(|b| b != 0)
    }

    /// Read a 4-bit value
    pub fn read_nibble(&mut self) -> ThumbHashResult<u8> {
        self.read_bits(4).map(|n| n as u8)
    }

    /// Number of bytes pulled from the input so far
    pub fn bytes_consumed(&self) -> usize {
        self.position
    }
}
