//! Batched 3D Model (`b3dm`) tiles.
//!
//! Layout: a 32-byte header (magic `b3dm` plus seven little-endian `u32`
//! fields), then feature-table JSON, feature-table binary, batch-table JSON,
//! batch-table binary and finally the embedded glTF payload.

mod body;
mod header;

pub use body::B3dmBody;
pub use header::{B3dmHeader, B3DM_HEADER_BYTE_LENGTH, B3DM_VERSION};

use crate::{ModelPayload, Tile, TileHeader};

/// A `b3dm` header paired with a `b3dm` body.
pub type B3dmTile = Tile<B3dmHeader>;

impl Tile<B3dmHeader> {
    /// Builds a synced `b3dm` tile around a model payload.
    ///
    /// This is the construction path for producers: the header is created
    /// for the same kind as the body and synced before the tile is returned.
    pub fn build<P>(payload: P) -> Self
    where
        P: ModelPayload + Send + Sync + 'static,
    {
        let body = B3dmBody::from_payload(payload);
        let mut header = B3dmHeader::new();
        header.sync(&body);
        Tile::synced(header, body)
    }
}
