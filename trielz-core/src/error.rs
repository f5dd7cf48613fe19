//! Error types for the trielz foundation layer.

use thiserror::Error;

/// Errors raised by the bit stream codec and the node arena.
///
/// Both conditions are non-recoverable for the current compression pass:
/// a truncated stream means the input is incomplete by construction, and
/// an allocation failure means the dictionary cannot grow any further.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The bit reader was asked for more bits than remain in the input.
    #[error("truncated stream: requested {requested} bits, {remaining} remaining")]
    TruncatedStream {
        /// Number of bits requested by the caller.
        requested: u8,
        /// Number of unread bits left in the stream.
        remaining: u64,
    },

    /// The arena could not obtain backing memory for a new block.
    #[error("out of memory: failed to allocate {bytes} bytes")]
    OutOfMemory {
        /// Size of the failed allocation in bytes.
        bytes: usize,
    },
}

/// Result type alias for trielz-core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
