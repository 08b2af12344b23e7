//! Batched 3D Model (`b3dm`) tile codec.
//!
//! A tile is a fixed-size header followed by variable-length sections: a
//! feature table, a batch table and an embedded 3D model. The header's
//! length fields must describe the body exactly, so the header is derived
//! from the body by an explicit sync step rather than maintained on every
//! mutation.
//!
//! # Overview
//!
//! - [`TileHeader`] / [`TileBody`] - capabilities every tile kind provides
//! - [`B3dmHeader`] / [`B3dmBody`] - the `b3dm` implementation
//! - [`Tile`] - header and body of one kind, with stale-header tracking
//! - [`decode_tile`] - decodes any supported kind by its magic
//!
//! # Example
//!
//! ```
//! use tile3d::{decode_tile, B3dmHeader, B3dmTile, DecodeOptions, TileHeader};
//!
//! let tile = B3dmTile::build(vec![0u8; 100]);
//! assert_eq!(tile.header().tile_byte_length, 132);
//!
//! let bytes = tile.to_bytes();
//! let header = B3dmHeader::from_bytes(&bytes[..32]).unwrap();
//! assert_eq!(&header, tile.header());
//!
//! let decoded = decode_tile(&bytes, &DecodeOptions::default()).unwrap();
//! assert_eq!(decoded.to_bytes(), bytes);
//! ```

mod error;
mod kind;
mod options;
mod payload;
mod table;
mod tile;
mod traits;

pub mod b3dm;

pub use b3dm::{B3dmBody, B3dmHeader, B3dmTile};
pub use error::TileError;
pub use kind::TileKind;
pub use options::DecodeOptions;
pub use payload::{ModelPayload, RawPayload};
pub use table::{Table, BATCH_LENGTH_KEY};
pub use tile::{decode_tile, AnyTile, Tile};
pub use traits::{TileBody, TileHeader};
