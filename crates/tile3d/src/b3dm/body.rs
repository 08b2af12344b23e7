use tile3d_buffers::Writer;

use crate::{ModelPayload, RawPayload, Table, TileBody};

/// `b3dm` tile body: feature table, batch table and the embedded model.
///
/// Every mutating accessor bumps [`TileBody::revision`], so a [`Tile`]
/// can tell whether its header was synced against the current content.
///
/// [`Tile`]: crate::Tile
#[derive(Debug)]
pub struct B3dmBody {
    feature_table: Table,
    batch_table: Table,
    payload: Box<dyn ModelPayload + Send + Sync>,
    /// Header `batch_length` of a decoded tile whose feature table has no
    /// `BATCH_LENGTH` entry.
    declared_batch_length: u32,
    revision: u64,
}

impl Default for B3dmBody {
    fn default() -> Self {
        Self::from_payload(RawPayload::default())
    }
}

impl B3dmBody {
    /// A body that owns `payload` and has empty tables.
    ///
    /// The payload is not validated; its encoder owns its correctness.
    pub fn from_payload<P>(payload: P) -> Self
    where
        P: ModelPayload + Send + Sync + 'static,
    {
        Self {
            feature_table: Table::new(),
            batch_table: Table::new(),
            payload: Box::new(payload),
            declared_batch_length: 0,
            revision: 0,
        }
    }

    pub(crate) fn from_sections(
        feature_table: Table,
        batch_table: Table,
        payload: RawPayload,
        declared_batch_length: u32,
    ) -> Self {
        Self {
            feature_table,
            batch_table,
            payload: Box::new(payload),
            declared_batch_length,
            revision: 0,
        }
    }

    pub fn payload(&self) -> &(dyn ModelPayload + Send + Sync) {
        self.payload.as_ref()
    }

    /// Replaces the payload, returning the previous one.
    pub fn set_payload<P>(&mut self, payload: P) -> Box<dyn ModelPayload + Send + Sync>
    where
        P: ModelPayload + Send + Sync + 'static,
    {
        self.touch();
        std::mem::replace(&mut self.payload, Box::new(payload))
    }

    pub fn feature_table(&self) -> &Table {
        &self.feature_table
    }

    pub fn feature_table_mut(&mut self) -> &mut Table {
        self.touch();
        &mut self.feature_table
    }

    pub fn batch_table(&self) -> &Table {
        &self.batch_table
    }

    pub fn batch_table_mut(&mut self) -> &mut Table {
        self.touch();
        &mut self.batch_table
    }

    /// Number of batched features.
    ///
    /// Taken from the feature table's `BATCH_LENGTH`; a decoded tile without
    /// that entry keeps the count its header declared.
    pub fn batch_length(&self) -> u32 {
        self.feature_table
            .batch_length()
            .unwrap_or(self.declared_batch_length)
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl TileBody for B3dmBody {
    fn to_bytes(&self) -> Vec<u8> {
        let ft_json = self.feature_table.json_bytes();
        let bt_json = self.batch_table.json_bytes();
        let payload = self.payload.to_bytes();

        let mut writer = Writer::with_capacity(
            ft_json.len()
                + self.feature_table.binary().len()
                + bt_json.len()
                + self.batch_table.binary().len()
                + payload.len(),
        );
        writer.buf(&ft_json);
        writer.buf(self.feature_table.binary());
        writer.buf(&bt_json);
        writer.buf(self.batch_table.binary());
        writer.buf(&payload);
        writer.flush()
    }

    fn byte_length(&self) -> usize {
        [
            self.feature_table.json_bytes().len(),
            self.feature_table.binary().len(),
            self.batch_table.json_bytes().len(),
            self.batch_table.binary().len(),
            self.payload.byte_length(),
        ]
        .iter()
        .fold(0usize, |acc, &len| acc.saturating_add(len))
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}
