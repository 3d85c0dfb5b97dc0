//! Builder-configured reference differ.

use super::engine::build_update_action_for_references;
use crate::identifier::{are_resource_identifiers_equal, Keyed, ResourceIdentifier};

/// Reference comparison with the mode fixed up front.
///
/// A sync run typically decides once whether references are compared by the
/// resolved target's key or by the literal key attribute, then applies that
/// mode across every field it diffs. `ReferenceDiffer` carries that choice so
/// call sites don't repeat the flag.
///
/// ```
/// use sync_diff::{ReferenceDiffer, ResourceIdentifier};
///
/// struct Category { key: Option<String> }
/// impl sync_diff::Keyed for Category {
///     fn key(&self) -> Option<&str> { self.key.as_deref() }
/// }
///
/// let differ = ReferenceDiffer::new().compare_resolved_keys(true);
/// let old = ResourceIdentifier::<Category>::plain_with_key("cat-1");
/// let new = ResourceIdentifier::resolved_reference(Category { key: Some("cat-1".into()) });
///
/// let action: Option<&str> = differ.build_update_action(Some(&old), Some(&new), || {
///     Some("setParent")
/// });
/// assert!(action.is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ReferenceDiffer {
    use_keys: bool,
}

impl ReferenceDiffer {
    /// Create a differ that compares by the resolved target's key.
    pub fn new() -> Self {
        Self { use_keys: true }
    }

    /// Set whether comparison resolves through references to the target's key
    /// (`true`) or uses the literal key attribute as given (`false`).
    pub fn compare_resolved_keys(mut self, use_keys: bool) -> Self {
        self.use_keys = use_keys;
        self
    }

    /// Whether two identifiers are equal under the configured mode.
    pub fn are_equal<T, U>(
        &self,
        old: Option<&ResourceIdentifier<T>>,
        new: Option<&ResourceIdentifier<U>>,
    ) -> bool
    where
        T: Keyed,
        U: Keyed,
    {
        are_resource_identifiers_equal(old, new, self.use_keys)
    }

    /// Lazily build an update action when the identifiers differ under the
    /// configured mode.
    pub fn build_update_action<T, U, V, F>(
        &self,
        old: Option<&ResourceIdentifier<T>>,
        new: Option<&ResourceIdentifier<U>>,
        build: F,
    ) -> Option<V>
    where
        T: Keyed,
        U: Keyed,
        F: FnOnce() -> Option<V>,
    {
        build_update_action_for_references(old, new, build, self.use_keys)
    }
}

impl Default for ReferenceDiffer {
    fn default() -> Self {
        Self::new()
    }
}
