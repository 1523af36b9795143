//! Bitstream writer implementation

use thumbhash_core::{ThumbHashError, ThumbHashResult};

/// Writes LSB-first bit fields into an owned byte vector
#[derive(Debug, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    buffer: u64,
    bits_in_buffer: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
            ..Self::default()
        }
    }

    /// Write the low `num_bits` bits of `value`
    ///
    /// Higher bits of `value` are discarded.
    pub fn write_bits(&mut self, value: u32, num_bits: usize) -> ThumbHashResult<()> {
        if num_bits > 32 {
            return Err(ThumbHashError::InvalidParameter(
                "Cannot write more than 32 bits at once".to_string(),
            ));
        }

        let mask = (1u64 << num_bits) - 1;
        self.buffer |= (value as u64 & mask) << self.bits_in_buffer;
        self.bits_in_buffer += num_bits;

        // Flush complete bytes
        while self.bits_in_buffer >= 8 {
            self.bytes.push((self.buffer & 0xFF) as u8);
            self.buffer >>= 8;
            self.bits_in_buffer -= 8;
        }

        Ok(())
    }

    /// Write a single bit
    pub fn write_bit(&mut self, value: bool) -> ThumbHashResult<()> {
        self.write_bits(value as u32, 1)
    }

    /// Write a 4-bit value
    pub fn write_nibble(&mut self, value: u8) -> ThumbHashResult<()> {
        self.write_bits(value as u32, 4)
    }

    /// Number of bits written so far
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.bits_in_buffer
    }

    /// Finish the stream, zero-padding the last partial byte
    pub fn into_bytes(mut self) -> Vec<u8> {
        if self.bits_in_buffer > 0 {
            self.bytes.push((self.buffer & 0xFF) as u8);
        }
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BitReader;

    #[test]
    fn test_write_bits() {
        let mut writer = BitWriter::new();

        writer.write_bits(0b1010, 4).unwrap();
        writer.write_bits(0b1010, 4).unwrap();
        writer.write_bits(0b11001100, 8).unwrap();

        assert_eq!(writer.into_bytes(), vec![0b10101010, 0b11001100]);
    }

    #[test]
    fn test_write_bit() {
        let mut writer = BitWriter::new();
        for bit in [false, true, false, true, false, true, false, true] {
            writer.write_bit(bit).unwrap();
        }

        assert_eq!(writer.into_bytes(), vec![0b10101010]);
    }

    #[test]
    fn test_odd_nibble_count_is_padded() {
        let mut writer = BitWriter::new();
        writer.write_nibble(0x1).unwrap();
        writer.write_nibble(0x2).unwrap();
        writer.write_nibble(0xF).unwrap();
        assert_eq!(writer.bit_len(), 12);

        assert_eq!(writer.into_bytes(), vec![0x21, 0x0F]);
    }

    #[test]
    fn test_excess_bits_are_masked() {
        let mut writer = BitWriter::new();
        writer.write_bits(0xFF, 3).unwrap();
        writer.write_bits(0, 5).unwrap();

        assert_eq!(writer.into_bytes(), vec![0b0000_0111]);
    }

    #[test]
    fn test_too_many_bits_rejected() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b101, 3).unwrap();

        assert!(matches!(
            writer.write_bits(0, 33),
            Err(ThumbHashError::InvalidParameter(_))
        ));
        // A rejected write leaves the stream untouched
        assert_eq!(writer.bit_len(), 3);
        writer.write_bits(u32::MAX, 32).unwrap();
        assert_eq!(writer.bit_len(), 35);
    }

    #[test]
    fn test_mixed_width_fields_read_back() {
        let fields = [(45u32, 6usize), (12, 6), (63, 6), (17, 5), (1, 1), (5, 3)];

        let mut writer = BitWriter::new();
        for &(value, bits) in &fields {
            writer.write_bits(value, bits).unwrap();
        }
        let bytes = writer.into_bytes();
        assert_eq!(bytes.len(), 4);

        let mut reader = BitReader::new(&bytes);
        for &(value, bits) in &fields {
            assert_eq!(reader.read_bits(bits).unwrap(), value);
        }
    }
}
