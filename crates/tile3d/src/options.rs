//! Decoding options.

use serde::Deserialize;

/// Options for decoding complete tiles.
///
/// Deserializable so a host application can carry it in its own config
/// file; missing keys take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Require the header's `tile_byte_length` to equal the buffer length.
    ///
    /// When `false`, bytes beyond the declared tile length are ignored, which
    /// lets a caller decode a tile from the front of a larger buffer.
    pub strict_tile_length: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            strict_tile_length: true,
        }
    }
}

impl DecodeOptions {
    /// Options that tolerate trailing bytes after the tile.
    pub fn lenient() -> Self {
        Self {
            strict_tile_length: false,
        }
    }
}
