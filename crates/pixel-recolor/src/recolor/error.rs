//! Error type for raw pixel buffers.

use std::fmt;

/// Error returned when a byte buffer is not a valid interleaved RGBA8 image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Buffer length is not a multiple of 4 bytes
    NotRgba {
        /// Length of the rejected buffer
        len: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::NotRgba { len } => write!(
                f,
                "buffer of {} bytes is not interleaved RGBA8 (length must be a multiple of 4)",
                len
            ),
        }
    }
}

impl std::error::Error for BufferError {}
