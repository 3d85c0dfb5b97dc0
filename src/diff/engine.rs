//! Lazy update-action construction.
//!
//! Every function here follows the same protocol: compare the old and new
//! state first, and only when they differ hand control to the caller's
//! builder closure. The closure is invoked at most once, never on equality,
//! so callers can defer work that is only meaningful once a change is known
//! to exist.

use crate::identifier::{are_resource_identifiers_equal, Keyed, ResourceIdentifier};

/// Compare two states and, only if they differ, build an update action.
///
/// Equal states (including both absent) yield `None` without invoking
/// `build`. When the states differ, `build` runs exactly once; it may itself
/// return `None` to signal that no action is needed despite the difference,
/// and that decision passes through unchanged.
pub fn build_update_action<S, U, F>(old: Option<&S>, new: Option<&S>, build: F) -> Option<U>
where
    S: PartialEq + ?Sized,
    F: FnOnce() -> Option<U>,
{
    if old == new {
        return None;
    }
    tracing::trace!("state differs, deferring to update action builder");
    build()
}

/// List-valued variant of [`build_update_action`].
///
/// Equal states yield an empty list without invoking `build`; differing
/// states yield exactly the closure's list, which may itself be empty.
pub fn build_update_actions<S, U, F>(old: Option<&S>, new: Option<&S>, build: F) -> Vec<U>
where
    S: PartialEq + ?Sized,
    F: FnOnce() -> Vec<U>,
{
    if old == new {
        return Vec::new();
    }
    tracing::trace!("state differs, deferring to update actions builder");
    build()
}

/// Fallible variant of [`build_update_action`].
///
/// A builder error propagates unchanged; the engine adds no recovery. The
/// closure is still invoked at most once, only on inequality.
pub fn try_build_update_action<S, U, E, F>(
    old: Option<&S>,
    new: Option<&S>,
    build: F,
) -> Result<Option<U>, E>
where
    S: PartialEq + ?Sized,
    F: FnOnce() -> Result<Option<U>, E>,
{
    if old == new {
        return Ok(None);
    }
    build()
}

/// Fallible variant of [`build_update_actions`].
pub fn try_build_update_actions<S, U, E, F>(
    old: Option<&S>,
    new: Option<&S>,
    build: F,
) -> Result<Vec<U>, E>
where
    S: PartialEq + ?Sized,
    F: FnOnce() -> Result<Vec<U>, E>,
{
    if old == new {
        return Ok(Vec::new());
    }
    build()
}

/// [`build_update_action`] with identifier-aware equality.
///
/// Instead of structural equality, the two identifiers are compared by their
/// comparison keys (see [`are_resource_identifiers_equal`]), parameterized by
/// `use_keys`. The laziness contract is unchanged.
pub fn build_update_action_for_references<T, U, V, F>(
    old: Option<&ResourceIdentifier<T>>,
    new: Option<&ResourceIdentifier<U>>,
    build: F,
    use_keys: bool,
) -> Option<V>
where
    T: Keyed,
    U: Keyed,
    F: FnOnce() -> Option<V>,
{
    if are_resource_identifiers_equal(old, new, use_keys) {
        return None;
    }
    tracing::trace!(use_keys, "reference differs, deferring to update action builder");
    build()
}
