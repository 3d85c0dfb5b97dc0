//! Resource identifiers and reference resolution.
//!
//! A resource identifier points at another resource by id and/or key; a
//! reference may additionally carry the resolved target entity. This module
//! normalizes identifiers to a canonical comparison key so that references are
//! compared by logical identity rather than by how they happen to be
//! represented, and classifies wire-form reference payloads by type.

mod payload;
mod resolver;
mod resource;

pub use payload::{
    is_reference_of_type, reference_from_payload, reference_id, reference_type_id,
    REFERENCE_ID_FIELD, REFERENCE_TYPE_ID_FIELD,
};
pub use resolver::{
    are_resource_identifiers_equal, get_key_of_resource_identifier,
    to_resource_identifier_if_not_null,
};
pub use resource::{Keyed, Referenceable, ResourceIdentifier};
