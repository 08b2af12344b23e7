//! Tile codec error type.

use thiserror::Error;
use tile3d_buffers::{print_octets, BufferError};

/// Error type for tile header and body decoding.
///
/// Encoding never fails; every variant here comes from reading bytes, except
/// [`TileError::StaleHeader`] and [`TileError::TileTooLarge`], which are only
/// produced on request by
/// [`Tile::to_bytes_checked`](crate::Tile::to_bytes_checked).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TileError {
    #[error("invalid header length: expected {expected} bytes, got {actual}")]
    InvalidHeaderLength { expected: usize, actual: usize },
    #[error("unsupported tile kind (magic {})", print_octets(.magic, 4))]
    UnsupportedTileKind { magic: [u8; 4] },
    #[error(
        "magic mismatch: expected {}, found {}",
        print_octets(.expected, 4),
        print_octets(.found, 4)
    )]
    MagicMismatch { expected: [u8; 4], found: [u8; 4] },
    #[error("unsupported tile version {version}")]
    UnsupportedVersion { version: u32 },
    #[error("tile byte length mismatch: header declares {declared}, buffer holds {actual}")]
    TileLengthMismatch { declared: usize, actual: usize },
    #[error("truncated body: sections declare {declared} bytes, {available} available")]
    TruncatedBody { declared: usize, available: usize },
    #[error("invalid table JSON: {0}")]
    InvalidTableJson(String),
    #[error("header is stale: body changed since the last sync")]
    StaleHeader,
    #[error("tile of {byte_length} bytes does not fit u32 length fields")]
    TileTooLarge { byte_length: usize },
    #[error(transparent)]
    Buffer(#[from] BufferError),
}
