//! Feature-table and batch-table sections.
//!
//! Both tables are a JSON header followed by a binary body. The contents are
//! opaque to the codec; only their serialized lengths feed the tile header.
//! An empty table serializes to zero bytes in both sections.
//!
//! A table decoded from a tile keeps its JSON section bytes exactly as read
//! (padding, number spelling and all) and writes them back unchanged until
//! the JSON is mutated through [`Table::json_mut`].

use serde_json::{Map, Value};

use crate::TileError;

/// Feature-table key holding the number of batched features.
pub const BATCH_LENGTH_KEY: &str = "BATCH_LENGTH";

/// A JSON + binary table section pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    json: Map<String, Value>,
    binary: Vec<u8>,
    /// Decoded JSON section bytes, when they differ from the compact form.
    raw_json: Option<Vec<u8>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.json.is_empty() && self.binary.is_empty() && self.raw_json.is_none()
    }

    pub fn json(&self) -> &Map<String, Value> {
        &self.json
    }

    /// Mutable JSON access. Drops any preserved decoded bytes, so the next
    /// serialization is the compact form of the map.
    pub fn json_mut(&mut self) -> &mut Map<String, Value> {
        self.raw_json = None;
        &mut self.json
    }

    pub fn binary(&self) -> &[u8] {
        &self.binary
    }

    pub fn binary_mut(&mut self) -> &mut Vec<u8> {
        &mut self.binary
    }

    /// Serialized JSON section.
    ///
    /// Preserved decoded bytes when present, otherwise the compact JSON
    /// text, or nothing for an empty map.
    pub fn json_bytes(&self) -> Vec<u8> {
        if let Some(raw) = &self.raw_json {
            return raw.clone();
        }
        compact_json(&self.json)
    }

    /// Rebuilds a table from its two serialized sections.
    ///
    /// An empty JSON section decodes to an empty map. Trailing padding
    /// spaces are accepted; anything other than a JSON object is rejected.
    pub fn from_sections(json: &[u8], binary: &[u8]) -> Result<Self, TileError> {
        let map = if json.is_empty() {
            Map::new()
        } else {
            match serde_json::from_slice::<Value>(json) {
                Ok(Value::Object(map)) => map,
                Ok(other) => {
                    return Err(TileError::InvalidTableJson(format!(
                        "expected a JSON object, found {}",
                        json_type_name(&other)
                    )))
                }
                Err(err) => return Err(TileError::InvalidTableJson(err.to_string())),
            }
        };
        let raw_json = (compact_json(&map) != json).then(|| json.to_vec());
        Ok(Self {
            json: map,
            binary: binary.to_vec(),
            raw_json,
        })
    }

    /// The `BATCH_LENGTH` entry, when present as an integer that fits `u32`.
    pub fn batch_length(&self) -> Option<u32> {
        self.json
            .get(BATCH_LENGTH_KEY)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
    }
}

fn compact_json(map: &Map<String, Value>) -> Vec<u8> {
    if map.is_empty() {
        return Vec::new();
    }
    Value::Object(map.clone()).to_string().into_bytes()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
