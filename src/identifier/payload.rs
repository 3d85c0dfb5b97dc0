//! Wire-form reference payloads.
//!
//! References arrive from the API as small JSON objects carrying a `typeId`
//! discriminator and an `id`. Only the discriminator is interpreted here;
//! everything else in the payload is opaque to this crate.

use crate::error::{Result, SyncDiffError};
use crate::identifier::ResourceIdentifier;
use serde_json::Value;

/// Field holding the type discriminator of a wire-form reference.
pub const REFERENCE_TYPE_ID_FIELD: &str = "typeId";

/// Field holding the referenced resource's id.
pub const REFERENCE_ID_FIELD: &str = "id";

/// The type discriminator of a wire-form reference, if present and a string.
pub fn reference_type_id(payload: &Value) -> Option<&str> {
    payload.get(REFERENCE_TYPE_ID_FIELD).and_then(Value::as_str)
}

/// Whether the payload is a reference to a resource of the expected type.
///
/// Returns false when the discriminator field is absent, not a string, or the
/// payload is not an object at all.
pub fn is_reference_of_type(payload: &Value, expected_type_id: &str) -> bool {
    reference_type_id(payload) == Some(expected_type_id)
}

/// The referenced resource's id, if present and a string.
pub fn reference_id(payload: &Value) -> Option<&str> {
    payload.get(REFERENCE_ID_FIELD).and_then(Value::as_str)
}

/// Lift a wire-form reference payload into an unresolved [`ResourceIdentifier`].
///
/// The payload must be a JSON object with a string `id` field. The target is
/// left unresolved; resolution is the caller's concern.
pub fn reference_from_payload<T>(payload: &Value) -> Result<ResourceIdentifier<T>> {
    if !payload.is_object() {
        return Err(SyncDiffError::NotAnObject);
    }
    let id = reference_id(payload).ok_or(SyncDiffError::MissingField {
        field: REFERENCE_ID_FIELD,
    })?;
    Ok(ResourceIdentifier::unresolved_reference(id))
}
