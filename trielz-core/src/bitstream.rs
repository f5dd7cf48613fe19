//! MSB-first bit stream codec.
//!
//! Packs a sequence of unsigned integers of arbitrary width (1-32 bits)
//! into a byte sequence with no padding markers, and unpacks them again.
//! Bits are packed from the most significant end of each byte, continuing
//! into the next byte with no inter-value padding, so a writer and a reader
//! that agree on the width sequence reproduce the values exactly.

use crate::error::{CoreError, Result};

/// MSB-first bit writer.
///
/// ```rust
/// use trielz_core::bitstream::MsbBitWriter;
///
/// let mut writer = MsbBitWriter::new();
/// writer.write(0b101, 3);
/// writer.write(0xAB, 8);
/// let bytes = writer.into_vec();
/// assert_eq!(bytes.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MsbBitWriter {
    /// Completed output bytes.
    output: Vec<u8>,
    /// Staging buffer; pending bits live in its low end.
    buffer: u64,
    /// Number of pending bits in `buffer` (always < 8 between calls).
    bits_in_buffer: u8,
}

impl MsbBitWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the low `width` bits of `value`, most significant bit first.
    ///
    /// # Panics
    ///
    /// Panics if `width` is not in `1..=32`. Width is a precondition of the
    /// wire format, not a recoverable condition.
    pub fn write(&mut self, value: u32, width: u8) {
        assert!((1..=32).contains(&width), "bit width must be in 1..=32");

        let mask = if width == 32 {
            u32::MAX
        } else {
            (1u32 << width) - 1
        };
        self.buffer = (self.buffer << width) | u64::from(value & mask);
        self.bits_in_buffer += width;

        // Flush completed bytes from the high end of the pending bits.
        while self.bits_in_buffer >= 8 {
            self.output.push((self.buffer >> (self.bits_in_buffer - 8)) as u8);
            self.bits_in_buffer -= 8;
        }
    }

    /// Number of bits written so far.
    pub fn bit_len(&self) -> u64 {
        self.output.len() as u64 * 8 + u64::from(self.bits_in_buffer)
    }

    /// Discard all written bits and start over.
    pub fn reset(&mut self) {
        self.output.clear();
        self.buffer = 0;
        self.bits_in_buffer = 0;
    }

    /// Finish the stream and return the packed bytes.
    ///
    /// A final partial byte is zero-padded on its low side; readers treat
    /// those trailing bits as ignorable because no complete value fits in
    /// them.
    pub fn into_vec(mut self) -> Vec<u8> {
        if self.bits_in_buffer > 0 {
            let pad = 8 - self.bits_in_buffer;
            self.output.push((self.buffer << pad) as u8);
        }
        self.output
    }
}

/// MSB-first bit reader over a byte slice.
#[derive(Debug)]
pub struct MsbBitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Index of the next unconsumed byte.
    byte_pos: usize,
    /// Staging buffer; unread bits live in its low end.
    buffer: u64,
    /// Number of unread bits in `buffer`.
    bits_in_buffer: u8,
}

impl<'a> MsbBitReader<'a> {
    /// Create a reader positioned at the first bit of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            buffer: 0,
            bits_in_buffer: 0,
        }
    }

    /// Consume the next `width` bits and return them right-aligned.
    ///
    /// Returns [`CoreError::TruncatedStream`] if fewer than `width` bits
    /// remain.
    ///
    /// # Panics
    ///
    /// Panics if `width` is not in `1..=32`.
    pub fn read(&mut self, width: u8) -> Result<u32> {
        assert!((1..=32).contains(&width), "bit width must be in 1..=32");

        while self.bits_in_buffer < width && self.byte_pos < self.data.len() {
            self.buffer = (self.buffer << 8) | u64::from(self.data[self.byte_pos]);
            self.byte_pos += 1;
            self.bits_in_buffer += 8;
        }

        if self.bits_in_buffer < width {
            return Err(CoreError::TruncatedStream {
                requested: width,
                remaining: self.remaining_bits(),
            });
        }

        let shift = self.bits_in_buffer - width;
        let mask = if width == 32 {
            u64::from(u32::MAX)
        } else {
            (1u64 << width) - 1
        };
        self.bits_in_buffer -= width;

        Ok(((self.buffer >> shift) & mask) as u32)
    }

    /// Number of unread bits remaining in the stream.
    pub fn remaining_bits(&self) -> u64 {
        (self.data.len() - self.byte_pos) as u64 * 8 + u64::from(self.bits_in_buffer)
    }

    /// Rewind to the first bit of the input.
    pub fn reset(&mut self) {
        self.byte_pos = 0;
        self.buffer = 0;
        self.bits_in_buffer = 0;
    }
}
