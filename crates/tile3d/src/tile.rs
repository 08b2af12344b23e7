//! The tile composite and magic-dispatched decoding.

use std::fmt;

use tracing::debug;

use crate::b3dm::B3dmHeader;
use crate::{DecodeOptions, TileBody, TileError, TileHeader, TileKind};

/// One header paired with one body of the same kind.
///
/// The tile remembers which body revision its header was last synced
/// against. Mutating the body through [`Tile::body_mut`] makes the header
/// stale until [`Tile::sync`] runs again; [`Tile::to_bytes`] still emits the
/// stale lengths, [`Tile::to_bytes_checked`] refuses to.
pub struct Tile<H: TileHeader> {
    header: H,
    body: H::Body,
    synced_revision: Option<u64>,
}

impl<H> fmt::Debug for Tile<H>
where
    H: TileHeader + fmt::Debug,
    H::Body: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tile")
            .field("header", &self.header)
            .field("body", &self.body)
            .field("synced", &self.is_synced())
            .finish()
    }
}

impl<H: TileHeader> Tile<H> {
    /// Pairs a header and body without syncing them.
    pub fn from_parts(header: H, body: H::Body) -> Self {
        Self {
            header,
            body,
            synced_revision: None,
        }
    }

    /// Pairs a header already synced against `body`.
    pub(crate) fn synced(header: H, body: H::Body) -> Self {
        let mut tile = Self::from_parts(header, body);
        tile.record_sync();
        tile
    }

    fn record_sync(&mut self) {
        self.synced_revision = self
            .header_describes_body()
            .then(|| self.body.revision());
    }

    /// Whether `tile_byte_length` equals the true header + body length. It
    /// cannot once the body outgrows `u32` and the length fields saturate.
    fn header_describes_body(&self) -> bool {
        let actual = H::BYTE_LENGTH.saturating_add(self.body.byte_length());
        self.header.tile_byte_length() as usize == actual
    }

    pub fn header(&self) -> &H {
        &self.header
    }

    pub fn body(&self) -> &H::Body {
        &self.body
    }

    /// Mutable body access. Any change made through it leaves the header
    /// stale until the next [`Tile::sync`].
    pub fn body_mut(&mut self) -> &mut H::Body {
        &mut self.body
    }

    pub fn kind(&self) -> TileKind {
        H::KIND
    }

    /// Recomputes the header from the current body.
    ///
    /// A body too large for the `u32` length fields leaves the tile
    /// unsynced.
    pub fn sync(&mut self) {
        self.header.sync(&self.body);
        self.record_sync();
    }

    /// Whether the header describes the body as it is now.
    pub fn is_synced(&self) -> bool {
        self.synced_revision == Some(self.body.revision())
    }

    /// Header bytes followed by body bytes.
    ///
    /// The header is written as-is: if the body changed since the last
    /// sync, the length fields describe the old content.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.header.to_bytes();
        bytes.extend_from_slice(&self.body.to_bytes());
        bytes
    }

    /// Like [`Tile::to_bytes`], but refuses to emit a header that does not
    /// describe the body.
    ///
    /// # Errors
    ///
    /// - [`TileError::TileTooLarge`] when the tile cannot be described by
    ///   `u32` length fields at all.
    /// - [`TileError::StaleHeader`] when the body changed since the last
    ///   sync.
    pub fn to_bytes_checked(&self) -> Result<Vec<u8>, TileError> {
        if !self.is_synced() {
            let byte_length = H::BYTE_LENGTH.saturating_add(self.body.byte_length());
            if u32::try_from(byte_length).is_err() {
                return Err(TileError::TileTooLarge { byte_length });
            }
            return Err(TileError::StaleHeader);
        }
        Ok(self.to_bytes())
    }

    pub fn into_parts(self) -> (H, H::Body) {
        (self.header, self.body)
    }
}

impl<H> Tile<H>
where
    H: TileHeader + Clone + PartialEq,
{
    /// Decodes a complete tile of kind `H`.
    ///
    /// Table JSON sections are kept byte-for-byte, so re-emitting an
    /// unmodified decoded tile reproduces its input. The tile counts as
    /// synced when re-syncing its header against the decoded body would not
    /// change it; a feature-table `BATCH_LENGTH` that contradicts the
    /// header's `batch_length` is the one way a valid tile can fail that.
    ///
    /// # Errors
    ///
    /// - [`TileError::InvalidHeaderLength`] when `bytes` is shorter than the
    ///   header.
    /// - [`TileError::TileLengthMismatch`] when the declared tile length does
    ///   not fit the buffer (or, in strict mode, does not equal it).
    /// - Any header or body decoding error.
    pub fn from_bytes(bytes: &[u8], options: &DecodeOptions) -> Result<Self, TileError> {
        if bytes.len() < H::BYTE_LENGTH {
            return Err(TileError::InvalidHeaderLength {
                expected: H::BYTE_LENGTH,
                actual: bytes.len(),
            });
        }
        let header = H::from_bytes(&bytes[..H::BYTE_LENGTH])?;

        let declared = header.tile_byte_length() as usize;
        let fits = declared >= H::BYTE_LENGTH && declared <= bytes.len();
        if !fits || (options.strict_tile_length && declared != bytes.len()) {
            return Err(TileError::TileLengthMismatch {
                declared,
                actual: bytes.len(),
            });
        }
        debug!(
            kind = %H::KIND,
            declared,
            trailing = bytes.len() - declared,
            "decoding tile"
        );

        let body = header.read_body(&bytes[H::BYTE_LENGTH..declared])?;

        let mut resynced = header.clone();
        resynced.sync(&body);
        let synced_revision = (resynced == header).then(|| body.revision());

        Ok(Self {
            header,
            body,
            synced_revision,
        })
    }
}

/// A decoded tile of any supported kind.
#[derive(Debug)]
#[non_exhaustive]
pub enum AnyTile {
    Batched3dModel(Tile<B3dmHeader>),
}

impl AnyTile {
    pub fn kind(&self) -> TileKind {
        match self {
            AnyTile::Batched3dModel(_) => TileKind::Batched3dModel,
        }
    }

    pub fn is_synced(&self) -> bool {
        match self {
            AnyTile::Batched3dModel(tile) => tile.is_synced(),
        }
    }

    pub fn sync(&mut self) {
        match self {
            AnyTile::Batched3dModel(tile) => tile.sync(),
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            AnyTile::Batched3dModel(tile) => tile.to_bytes(),
        }
    }

    pub fn to_bytes_checked(&self) -> Result<Vec<u8>, TileError> {
        match self {
            AnyTile::Batched3dModel(tile) => tile.to_bytes_checked(),
        }
    }

    pub fn as_b3dm(&self) -> Option<&Tile<B3dmHeader>> {
        match self {
            AnyTile::Batched3dModel(tile) => Some(tile),
        }
    }
}

impl From<Tile<B3dmHeader>> for AnyTile {
    fn from(tile: Tile<B3dmHeader>) -> Self {
        AnyTile::Batched3dModel(tile)
    }
}

/// Decodes a tile, choosing the kind from its 4-byte magic.
///
/// # Errors
///
/// Returns [`TileError::UnsupportedTileKind`] for a magic no kind is
/// registered for, and [`TileError::InvalidHeaderLength`] when there are not
/// even enough bytes for a magic.
pub fn decode_tile(bytes: &[u8], options: &DecodeOptions) -> Result<AnyTile, TileError> {
    let magic: [u8; 4] = bytes
        .get(..4)
        .and_then(|prefix| prefix.try_into().ok())
        .ok_or(TileError::InvalidHeaderLength {
            expected: B3dmHeader::BYTE_LENGTH,
            actual: bytes.len(),
        })?;

    match TileKind::from_magic(magic) {
        Some(TileKind::Batched3dModel) => {
            Tile::<B3dmHeader>::from_bytes(bytes, options).map(AnyTile::Batched3dModel)
        }
        None => Err(TileError::UnsupportedTileKind { magic }),
    }
}
