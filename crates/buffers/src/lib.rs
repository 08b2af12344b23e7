//! Little-endian binary layout primitives for 3D tile codecs.
//!
//! 3D tile formats are built from fixed-width little-endian integers and
//! fixed-length ASCII tags laid out at known offsets. This crate provides a
//! cursor-tracking [`Reader`] with checked reads and an auto-growing
//! [`Writer`] for producing those layouts.
//!
//! # Example
//!
//! ```
//! use tile3d_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.tag(b"b3dm");
//! writer.u32(1);
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.tag::<4>().unwrap(), *b"b3dm");
//! assert_eq!(reader.u32().unwrap(), 1);
//! ```

mod octets;
mod reader;
mod writer;

pub use octets::print_octets;
pub use reader::Reader;
pub use writer::Writer;

use thiserror::Error;

/// Error type for buffer operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    #[error("end of buffer: needed {needed} bytes, {remaining} remaining")]
    EndOfBuffer { needed: usize, remaining: usize },
    /// A tag contained a byte outside the ASCII range.
    #[error("invalid ASCII tag: {0}")]
    InvalidAscii(String),
}
