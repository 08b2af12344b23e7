//! Known tile kinds and their magic tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a tile, identified on the wire by a 4-byte magic tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub enum TileKind {
    /// Batched 3D Model (`b3dm`).
    Batched3dModel,
}

impl TileKind {
    /// Every kind this crate can decode.
    pub const ALL: &'static [TileKind] = &[TileKind::Batched3dModel];

    pub const fn magic(self) -> [u8; 4] {
        match self {
            TileKind::Batched3dModel => *b"b3dm",
        }
    }

    /// Looks up the kind registered for a magic tag.
    pub fn from_magic(magic: [u8; 4]) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.magic() == magic)
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magic = self.magic();
        f.write_str(std::str::from_utf8(&magic).unwrap_or("????"))
    }
}
