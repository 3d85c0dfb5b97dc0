//! Resource identifier model.
//!
//! A [`ResourceIdentifier`] is a lightweight pointer to a resource, carrying a
//! system-generated id and/or a caller-assigned key. The `Reference` variant may
//! additionally carry the resolved target entity, which is consulted when
//! comparing identifiers by logical identity.

use serde::{Deserialize, Serialize};

/// Capability contract for values carrying a stable, caller-assigned key.
///
/// The key is a human-readable unique label, distinct from the system-generated
/// id. Entities without an assigned key return `None`.
pub trait Keyed {
    fn key(&self) -> Option<&str>;
}

/// Capability contract for entities that can produce a resource identifier
/// pointing to themselves.
///
/// Used to convert a fully-loaded entity into a lightweight pointer before
/// comparison or serialization.
pub trait Referenceable {
    /// The resource type the produced identifier points to.
    type Resource;

    fn to_resource_identifier(&self) -> ResourceIdentifier<Self::Resource>;
}

/// A pointer to a resource of type `T`, by id and/or key.
///
/// The two variants make the "is this really a reference?" question a total
/// match instead of a runtime type check:
///
/// - `Plain` carries only id/key attributes.
/// - `Reference` may additionally carry the resolved target entity. The
///   target's key is authoritative when comparing by logical identity, even
///   when the reference's own `key` attribute is set (see
///   [`resolved_key`](Self::resolved_key)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResourceIdentifier<T> {
    Plain {
        id: Option<String>,
        key: Option<String>,
    },
    Reference {
        id: Option<String>,
        key: Option<String>,
        /// The resolved target entity, absent when the reference has not been
        /// expanded.
        target: Option<T>,
    },
}

impl<T> ResourceIdentifier<T> {
    /// Create a plain identifier carrying only a key.
    pub fn plain_with_key(key: impl Into<String>) -> Self {
        Self::Plain {
            id: None,
            key: Some(key.into()),
        }
    }

    /// Create a plain identifier carrying only an id.
    pub fn plain_with_id(id: impl Into<String>) -> Self {
        Self::Plain {
            id: Some(id.into()),
            key: None,
        }
    }

    /// Create a reference with an explicit id/key/target combination.
    pub fn reference(id: Option<String>, key: Option<String>, target: Option<T>) -> Self {
        Self::Reference { id, key, target }
    }

    /// Create a reference by id whose target has not been resolved.
    pub fn unresolved_reference(id: impl Into<String>) -> Self {
        Self::Reference {
            id: Some(id.into()),
            key: None,
            target: None,
        }
    }

    /// Create a reference wrapping an already-resolved target entity.
    pub fn resolved_reference(target: T) -> Self {
        Self::Reference {
            id: None,
            key: None,
            target: Some(target),
        }
    }

    /// The system-generated id attribute, if set.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Plain { id, .. } | Self::Reference { id, .. } => id.as_deref(),
        }
    }

    /// The identifier's own key attribute, without resolving through the
    /// target. This is the comparison key for the non-resolving comparison
    /// mode.
    pub fn key_attr(&self) -> Option<&str> {
        match self {
            Self::Plain { key, .. } | Self::Reference { key, .. } => key.as_deref(),
        }
    }

    /// Whether this identifier is the reference variant.
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference { .. })
    }

    /// The resolved target entity, if this is a reference and it has been
    /// expanded.
    pub fn target(&self) -> Option<&T> {
        match self {
            Self::Plain { .. } => None,
            Self::Reference { target, .. } => target.as_ref(),
        }
    }
}

impl<T: Keyed> ResourceIdentifier<T> {
    /// The comparison key for the key-resolving mode.
    ///
    /// For a reference this is the resolved target's key; the reference's own
    /// `key` attribute is deliberately ignored, and an unresolved target (or a
    /// target without a key) yields `None`. For a plain identifier it is the
    /// own key attribute.
    pub fn resolved_key(&self) -> Option<&str> {
        match self {
            Self::Plain { key, .. } => key.as_deref(),
            Self::Reference { target, .. } => target.as_ref().and_then(Keyed::key),
        }
    }
}

impl<T: Keyed> Keyed for ResourceIdentifier<T> {
    fn key(&self) -> Option<&str> {
        self.key_attr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Target {
        key: Option<String>,
    }

    impl Keyed for Target {
        fn key(&self) -> Option<&str> {
            self.key.as_deref()
        }
    }

    #[test]
    fn plain_resolved_key_is_own_key() {
        let id: ResourceIdentifier<Target> = ResourceIdentifier::plain_with_key("cat-1");
        assert_eq!(id.resolved_key(), Some("cat-1"));
        assert_eq!(id.key_attr(), Some("cat-1"));
        assert!(!id.is_reference());
    }

    #[test]
    fn reference_resolved_key_ignores_own_key() {
        let id = ResourceIdentifier::reference(
            None,
            Some("stale".to_string()),
            Some(Target {
                key: Some("cat-1".to_string()),
            }),
        );
        assert_eq!(id.resolved_key(), Some("cat-1"));
        assert_eq!(id.key_attr(), Some("stale"));
    }

    #[test]
    fn unresolved_reference_has_no_resolved_key() {
        let id: ResourceIdentifier<Target> = ResourceIdentifier::unresolved_reference("abc-123");
        assert_eq!(id.resolved_key(), None);
        assert_eq!(id.id(), Some("abc-123"));
        assert!(id.is_reference());
    }

    #[test]
    fn reference_to_keyless_target_has_no_resolved_key() {
        let id = ResourceIdentifier::resolved_reference(Target { key: None });
        assert_eq!(id.resolved_key(), None);
    }
}
