use serde::{Deserialize, Serialize};
use tile3d_buffers::{Reader, Writer};
use tracing::{debug, warn};

use super::B3dmBody;
use crate::{RawPayload, Table, TileError, TileHeader, TileKind};

/// Fixed `b3dm` header length: 4-byte magic plus seven `u32` fields.
pub const B3DM_HEADER_BYTE_LENGTH: usize = 32;

/// The only `b3dm` version this codec reads and writes.
pub const B3DM_VERSION: u32 = 1;

/// `b3dm` tile header.
///
/// The length fields are plain data. They describe a body only after
/// [`TileHeader::sync`] has been called against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct B3dmHeader {
    #[serde(skip, default = "b3dm_magic")]
    pub magic: [u8; 4],
    pub version: u32,
    pub tile_byte_length: u32,
    pub feature_table_json_byte_length: u32,
    pub feature_table_binary_byte_length: u32,
    pub batch_table_json_byte_length: u32,
    pub batch_table_binary_byte_length: u32,
    pub batch_length: u32,
    #[serde(default = "b3dm_kind")]
    pub kind: TileKind,
}

fn b3dm_magic() -> [u8; 4] {
    TileKind::Batched3dModel.magic()
}

fn b3dm_kind() -> TileKind {
    TileKind::Batched3dModel
}

impl Default for B3dmHeader {
    fn default() -> Self {
        Self {
            magic: b3dm_magic(),
            version: B3DM_VERSION,
            tile_byte_length: 0,
            feature_table_json_byte_length: 0,
            feature_table_binary_byte_length: 0,
            batch_table_json_byte_length: 0,
            batch_table_binary_byte_length: 0,
            batch_length: 0,
            kind: b3dm_kind(),
        }
    }
}

impl B3dmHeader {
    /// An unsynced header with every length at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of the four table section lengths.
    pub fn table_byte_length(&self) -> usize {
        [
            self.feature_table_json_byte_length,
            self.feature_table_binary_byte_length,
            self.batch_table_json_byte_length,
            self.batch_table_binary_byte_length,
        ]
        .iter()
        .map(|&len| len as usize)
        .sum()
    }
}

/// Narrows a section length to its `u32` header field, saturating.
fn field_u32(len: usize, field: &'static str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| {
        warn!(field, len, "section length exceeds u32, saturating");
        u32::MAX
    })
}

impl TileHeader for B3dmHeader {
    type Body = B3dmBody;

    const KIND: TileKind = TileKind::Batched3dModel;
    const BYTE_LENGTH: usize = B3DM_HEADER_BYTE_LENGTH;

    fn to_bytes(&self) -> Vec<u8> {
        let mut writer = Writer::with_capacity(B3DM_HEADER_BYTE_LENGTH);
        writer.tag(&self.magic);
        writer.u32(self.version);
        writer.u32(self.tile_byte_length);
        writer.u32(self.feature_table_json_byte_length);
        writer.u32(self.feature_table_binary_byte_length);
        writer.u32(self.batch_table_json_byte_length);
        writer.u32(self.batch_table_binary_byte_length);
        writer.u32(self.batch_length);
        writer.flush()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, TileError> {
        if bytes.len() != B3DM_HEADER_BYTE_LENGTH {
            return Err(TileError::InvalidHeaderLength {
                expected: B3DM_HEADER_BYTE_LENGTH,
                actual: bytes.len(),
            });
        }

        let mut reader = Reader::new(bytes);
        let magic = reader.tag::<4>()?;
        if magic != Self::KIND.magic() {
            return Err(TileError::MagicMismatch {
                expected: Self::KIND.magic(),
                found: magic,
            });
        }
        let version = reader.u32()?;
        if version != B3DM_VERSION {
            return Err(TileError::UnsupportedVersion { version });
        }

        Ok(Self {
            magic,
            version,
            tile_byte_length: reader.u32()?,
            feature_table_json_byte_length: reader.u32()?,
            feature_table_binary_byte_length: reader.u32()?,
            batch_table_json_byte_length: reader.u32()?,
            batch_table_binary_byte_length: reader.u32()?,
            batch_length: reader.u32()?,
            kind: Self::KIND,
        })
    }

    fn sync(&mut self, body: &B3dmBody) {
        let ft_json = body.feature_table().json_bytes().len();
        let ft_binary = body.feature_table().binary().len();
        let bt_json = body.batch_table().json_bytes().len();
        let bt_binary = body.batch_table().binary().len();
        let payload = body.payload().byte_length();

        let total = [ft_json, ft_binary, bt_json, bt_binary, payload]
            .iter()
            .fold(B3DM_HEADER_BYTE_LENGTH, |acc, &len| acc.saturating_add(len));

        self.magic = Self::KIND.magic();
        self.version = B3DM_VERSION;
        self.kind = Self::KIND;
        self.tile_byte_length = field_u32(total, "tile_byte_length");
        self.feature_table_json_byte_length = field_u32(ft_json, "feature_table_json_byte_length");
        self.feature_table_binary_byte_length =
            field_u32(ft_binary, "feature_table_binary_byte_length");
        self.batch_table_json_byte_length = field_u32(bt_json, "batch_table_json_byte_length");
        self.batch_table_binary_byte_length =
            field_u32(bt_binary, "batch_table_binary_byte_length");
        self.batch_length = body.batch_length();

        debug!(
            tile_byte_length = self.tile_byte_length,
            payload,
            batch_length = self.batch_length,
            "synced b3dm header"
        );
    }

    fn read_body(&self, bytes: &[u8]) -> Result<B3dmBody, TileError> {
        let declared = self.table_byte_length();
        if declared > bytes.len() {
            return Err(TileError::TruncatedBody {
                declared,
                available: bytes.len(),
            });
        }

        let mut reader = Reader::new(bytes);
        let ft_json = reader.buf(self.feature_table_json_byte_length as usize)?;
        let ft_binary = reader.buf(self.feature_table_binary_byte_length as usize)?;
        let bt_json = reader.buf(self.batch_table_json_byte_length as usize)?;
        let bt_binary = reader.buf(self.batch_table_binary_byte_length as usize)?;
        let payload = reader.rest();

        debug!(
            tables = declared,
            payload = payload.len(),
            "read b3dm body sections"
        );

        Ok(B3dmBody::from_sections(
            Table::from_sections(ft_json, ft_binary)?,
            Table::from_sections(bt_json, bt_binary)?,
            RawPayload(payload.to_vec()),
            self.batch_length,
        ))
    }

    fn tile_byte_length(&self) -> u32 {
        self.tile_byte_length
    }

    fn kind(&self) -> TileKind {
        self.kind
    }
}
