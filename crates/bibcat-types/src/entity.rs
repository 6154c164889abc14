use serde::{Serialize, de::DeserializeOwned};

use crate::error::{CompositeValidationError, Error, Result};

/// Capability contract shared by all catalog entity payloads.
///
/// The API layer handles entities of any type through this trait: check a
/// decoded record with [`Entity::validate`], move it across process
/// boundaries with [`Entity::to_bytes`] and [`Entity::from_bytes`].
/// Decoding does not validate; callers that need schema conformance must
/// validate explicitly after [`Entity::from_bytes`].
pub trait Entity: Serialize + DeserializeOwned {
    /// Checks the record against its schema constraints, accumulating every
    /// violation instead of stopping at the first.
    fn validate(&self) -> Result<(), CompositeValidationError>;

    /// Canonical JSON encoding of the record. Required fields are emitted
    /// as `null` when absent, optional fields are omitted when empty.
    fn to_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(Error::Serialization)
    }

    /// Decodes a record from its JSON encoding. Unknown fields are ignored,
    /// type mismatches fail.
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(Error::Deserialization)
    }
}
