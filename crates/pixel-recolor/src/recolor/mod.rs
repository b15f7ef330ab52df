//! Recoloring of RGBA pixels and buffers.

mod error;
mod recolorer;

pub use error::BufferError;
pub use recolorer::PixelRecolorer;
