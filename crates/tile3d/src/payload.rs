//! The embedded model payload collaborator.
//!
//! A tile body carries one embedded 3D model (glTF for `b3dm`). This crate
//! never looks inside it: the payload only has to produce its own byte-exact
//! encoding.

use std::fmt;

/// An opaque, byte-producing model payload.
pub trait ModelPayload: fmt::Debug {
    /// Returns the byte-exact encoding of the payload.
    fn to_bytes(&self) -> Vec<u8>;

    /// Encoded length in bytes.
    ///
    /// Implementors that know their size without encoding should override
    /// this; sync calls it on every section.
    fn byte_length(&self) -> usize {
        self.to_bytes().len()
    }
}

impl ModelPayload for Vec<u8> {
    fn to_bytes(&self) -> Vec<u8> {
        self.clone()
    }

    fn byte_length(&self) -> usize {
        self.len()
    }
}

/// Payload bytes taken verbatim from a decoded tile.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RawPayload(pub Vec<u8>);

impl RawPayload {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for RawPayload {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for RawPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawPayload({} bytes)", self.0.len())
    }
}

impl ModelPayload for RawPayload {
    fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }

    fn byte_length(&self) -> usize {
        self.0.len()
    }
}
