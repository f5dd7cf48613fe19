//! # trielz-lzw: adaptive dictionary compression
//!
//! An LZW encoder/decoder built over a growing trie dictionary and the
//! MSB-first bit stream codec from `trielz-core`.
//!
//! ## Wire format
//!
//! - Raw variable-width LZW: no header, no clear code, no end-of-stream
//!   code, no padding marker.
//! - Codes start at 8 bits and widen by 1 bit whenever the next code to
//!   assign reaches `2^width`, up to 16 bits. Once `2^16` codes exist the
//!   dictionary stops growing and the stream continues at 16 bits.
//! - Codes are packed MSB-first with no inter-code padding; trailing bits
//!   of the final byte that are too narrow to hold a code are ignored.
//!
//! Encoder and decoder rebuild the same dictionary independently, in the
//! same order, from nothing but the code values themselves. No
//! configuration is exposed: the widths and the growth step are constants
//! of the format.
//!
//! ## Example
//!
//! ```rust
//! use trielz_lzw::{compress, decompress};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! let packed = compress(original).unwrap();
//! let unpacked = decompress(&packed).unwrap();
//!
//! assert_eq!(unpacked, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decoder;
mod dictionary;
mod encoder;
mod error;

pub use error::{LzwError, Result};

/// Compress a byte sequence into a packed LZW code stream.
///
/// Empty input produces an empty stream. Each call runs to completion on
/// the calling thread and owns its dictionary exclusively, so separate
/// calls may run on separate threads with no shared state.
///
/// # Example
///
/// ```rust
/// use trielz_lzw::compress;
///
/// let packed = compress(&[0x41; 1000]).unwrap();
/// assert!(packed.len() < 1000);
/// ```
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    encoder::encode(data, None)
}

/// Expand a packed LZW code stream back into the original bytes.
///
/// Fails with [`LzwError::InvalidCode`] if the stream references a code the
/// encoder could not have emitted; such input was not produced by
/// [`compress`] or was corrupted.
///
/// # Example
///
/// ```rust
/// use trielz_lzw::{compress, decompress};
///
/// let packed = compress(b"hello hello hello").unwrap();
/// assert_eq!(decompress(&packed).unwrap(), b"hello hello hello");
/// ```
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    decoder::decode(data, None)
}
