//! # trielz Core
//!
//! Foundation components for the trielz compression library:
//!
//! - [`bitstream`]: MSB-first bit-level I/O for variable-width codes
//! - [`arena`]: block-grown, append-only storage with stable handles
//! - [`error`]: error types
//!
//! The codec itself lives in the `trielz-lzw` crate; this crate carries the
//! two layers it is built on. Both are purely in-memory and single-threaded:
//! each compression pass owns its own writer, reader, and arena.
//!
//! ## Example
//!
//! ```rust
//! use trielz_core::bitstream::{MsbBitReader, MsbBitWriter};
//!
//! let mut writer = MsbBitWriter::new();
//! writer.write(0x1A5, 9);
//! writer.write(0x41, 8);
//! let bytes = writer.into_vec();
//!
//! let mut reader = MsbBitReader::new(&bytes);
//! assert_eq!(reader.read(9).unwrap(), 0x1A5);
//! assert_eq!(reader.read(8).unwrap(), 0x41);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use arena::{Arena, Handle};
pub use bitstream::{MsbBitReader, MsbBitWriter};
pub use error::{CoreError, Result};
