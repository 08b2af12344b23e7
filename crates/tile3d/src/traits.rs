//! Header and body capabilities shared by every tile kind.

use crate::{TileError, TileKind};

/// Fixed-layout tile header.
///
/// A header describes its body by section byte-lengths. Those lengths are
/// only correct right after [`TileHeader::sync`]; nothing updates them when
/// the body changes.
pub trait TileHeader: Sized {
    /// The body type this header describes.
    type Body: TileBody;

    /// Kind tag of this header.
    const KIND: TileKind;

    /// Serialized length of the header in bytes.
    const BYTE_LENGTH: usize;

    /// Emits the fixed-length byte-exact layout.
    fn to_bytes(&self) -> Vec<u8>;

    /// Parses a header from exactly [`Self::BYTE_LENGTH`] bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TileError::InvalidHeaderLength`] when `bytes` is not exactly
    /// the header length.
    fn from_bytes(bytes: &[u8]) -> Result<Self, TileError>;

    /// Recomputes every length field from the current body.
    fn sync(&mut self, body: &Self::Body);

    /// Splits the bytes following the header into a body, using the section
    /// lengths this header declares.
    fn read_body(&self, bytes: &[u8]) -> Result<Self::Body, TileError>;

    /// Total tile length this header declares.
    fn tile_byte_length(&self) -> u32;

    fn kind(&self) -> TileKind {
        Self::KIND
    }
}

/// Variable-length tile body.
pub trait TileBody {
    /// Concatenation of every section in wire order.
    fn to_bytes(&self) -> Vec<u8>;

    /// Serialized length in bytes, saturating at `usize::MAX`.
    fn byte_length(&self) -> usize {
        self.to_bytes().len()
    }

    /// Mutation counter; bumped by every method that changes the body.
    fn revision(&self) -> u64;
}
