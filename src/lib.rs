//! **Lazy update-action construction and resource identifier resolution for
//! sync workflows.**
//!
//! `sync-diff` is the comparison core of a resource reconciliation layer:
//! given "before" and "after" snapshots of an entity (or one of its fields),
//! it decides whether a change occurred and, only if so, defers to a
//! caller-supplied builder for the update action(s) describing the change. It
//! also normalizes *resource identifiers* — references that may arrive as a
//! raw id, a key, or a fully resolved nested object — into a canonical
//! comparison key, so references are compared by logical identity rather than
//! by incidental representation.
//!
//! The crate holds no state and performs no I/O; everything is a pure
//! function of its inputs plus the caller's deferred builders. What an update
//! action *is*, which entity schemas exist, and how diffs are sequenced
//! across entity types are all the caller's concern.
//!
//! ## Core Concepts & Modules
//!
//! - **[`diff`]**: the equality-then-lazy-action-construction protocol.
//!   [`build_update_action`] and friends compare two states and invoke the
//!   builder closure at most once, only on inequality, so expensive action
//!   construction is skipped entirely on the common "nothing changed" path.
//! - **[`identifier`]**: the [`ResourceIdentifier`] model and its comparison
//!   logic. A reference may carry a resolved target entity whose key is
//!   authoritative in key-resolving comparisons, plus classification of
//!   wire-form reference payloads by their `typeId` discriminator.
//!
//! ## Example: diffing one field
//!
//! ```
//! use sync_diff::build_update_action;
//!
//! #[derive(Debug, PartialEq)]
//! enum CategoryUpdateAction {
//!     ChangeName(String),
//! }
//!
//! let old_name = Some("Men's Shoes");
//! let new_name = Some("Men's Shoes");
//!
//! let action: Option<CategoryUpdateAction> =
//!     build_update_action(old_name, new_name, || {
//!         // Never reached: the names are equal.
//!         new_name.map(|n| CategoryUpdateAction::ChangeName(n.to_string()))
//!     });
//!
//! assert!(action.is_none());
//! ```
//!
//! ## Example: comparing references by logical identity
//!
//! ```
//! use sync_diff::{are_resource_identifiers_equal, Keyed, ResourceIdentifier};
//!
//! struct Category { key: Option<String> }
//! impl Keyed for Category {
//!     fn key(&self) -> Option<&str> { self.key.as_deref() }
//! }
//!
//! // The old snapshot holds a bare key, the new one a resolved reference.
//! let old = ResourceIdentifier::<Category>::plain_with_key("cat-1");
//! let new = ResourceIdentifier::resolved_reference(Category { key: Some("cat-1".into()) });
//!
//! // Resolving comparison sees the same logical target.
//! assert!(are_resource_identifiers_equal(Some(&old), Some(&new), true));
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Variable names like `old`/`new` are clear in context
#![allow(clippy::similar_names)]

pub mod diff;
pub mod error;
pub mod identifier;

// Re-export main types for convenience
pub use diff::{
    build_update_action, build_update_action_for_references, build_update_actions,
    try_build_update_action, try_build_update_actions, ReferenceDiffer,
};
pub use error::{Result, SyncDiffError};
pub use identifier::{
    are_resource_identifiers_equal, get_key_of_resource_identifier, is_reference_of_type,
    reference_from_payload, reference_id, reference_type_id, to_resource_identifier_if_not_null,
    Keyed, Referenceable, ResourceIdentifier, REFERENCE_ID_FIELD, REFERENCE_TYPE_ID_FIELD,
};
