//! Bit-level reading and writing for ThumbHash
//!
//! Fields are packed least-significant bit first: the first field written
//! occupies the low bits of the first byte, and a field that does not fit in
//! the remainder of a byte continues in the low bits of the next one.

pub mod bitreader;
pub mod bitwriter;

pub use bitreader::BitReader;
pub use bitwriter::BitWriter;
