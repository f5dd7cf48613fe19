//! LZW-specific error types.

use thiserror::Error;
use trielz_core::CoreError;

/// LZW compression/decompression errors.
///
/// All of these are fatal to the current pass. Compression is a pure
/// function of its input, so nothing is retried and no partial output is
/// returned.
#[derive(Debug, Error)]
pub enum LzwError {
    /// The decoder received a code that refers to neither an existing
    /// dictionary entry nor the single not-yet-transmitted entry that the
    /// run-of-identical-bytes case reserves. The stream was not produced by
    /// this encoder or was corrupted in transit.
    #[error("invalid LZW code {code} (dictionary has {table_len} entries)")]
    InvalidCode {
        /// The offending code value.
        code: u32,
        /// Number of dictionary entries at the time the code was read.
        table_len: u32,
    },

    /// Truncated stream or allocation failure from the foundation layer.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;
