//! Error types for the timestamp encoder

use thiserror::Error;

/// Errors raised while framing and emitting an encoded timestamp
///
/// Encoding itself is total: every in-range `(seconds, nanoseconds)` pair
/// produces a deterministic payload with no failure path. Errors only arise
/// in the writer that wraps the payload in an extension header.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// Payload does not fit any supported extension header
    #[error("Payload too large for extension header: {len} bytes")]
    PayloadTooLarge { len: usize },

    /// Underlying sink failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for encoder operations
pub type Result<T> = std::result::Result<T, EncodeError>;
