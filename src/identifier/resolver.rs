//! Identifier equality and key resolution.
//!
//! Two identifiers refer to the same resource iff their comparison keys are
//! equal. Which key that is depends on the comparison mode:
//!
//! - `use_keys = true` compares by the logical identity of the referenced
//!   object, resolving through a reference to its target's key.
//! - `use_keys = false` compares by whatever key attribute is already present
//!   on the identifier as given. This is the stricter, non-resolving mode: a
//!   reference's resolved target is never consulted, and the id attribute is
//!   never used as a fallback.
//!
//! The asymmetry between the two modes is deliberate; callers that want
//! resolved-identity semantics must opt in with `use_keys = true`.

use super::resource::{Keyed, Referenceable, ResourceIdentifier};

/// Decide whether two identifiers point at the same resource.
///
/// Absence is a valid, comparable value: an absent identifier has an absent
/// comparison key, and two absent keys compare equal.
pub fn are_resource_identifiers_equal<T, U>(
    old: Option<&ResourceIdentifier<T>>,
    new: Option<&ResourceIdentifier<U>>,
    use_keys: bool,
) -> bool
where
    T: Keyed,
    U: Keyed,
{
    comparison_key(old, use_keys) == comparison_key(new, use_keys)
}

fn comparison_key<T: Keyed>(
    identifier: Option<&ResourceIdentifier<T>>,
    use_keys: bool,
) -> Option<&str> {
    if use_keys {
        get_key_of_resource_identifier(identifier)
    } else {
        identifier.and_then(ResourceIdentifier::key_attr)
    }
}

/// The comparison key for the key-resolving mode.
///
/// Resolves through a reference to its target's key; a plain identifier
/// contributes its own key attribute. Absent identifier, absent target, or a
/// keyless target all yield `None` without failing.
pub fn get_key_of_resource_identifier<T: Keyed>(
    identifier: Option<&ResourceIdentifier<T>>,
) -> Option<&str> {
    identifier.and_then(ResourceIdentifier::resolved_key)
}

/// Convert an entity into the identifier that points at it, passing absence
/// through.
pub fn to_resource_identifier_if_not_null<R: Referenceable>(
    resource: Option<&R>,
) -> Option<ResourceIdentifier<R::Resource>> {
    resource.map(Referenceable::to_resource_identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Category {
        key: Option<String>,
    }

    impl Category {
        fn with_key(key: &str) -> Self {
            Self {
                key: Some(key.to_string()),
            }
        }
    }

    impl Keyed for Category {
        fn key(&self) -> Option<&str> {
            self.key.as_deref()
        }
    }

    impl Referenceable for Category {
        type Resource = Category;

        fn to_resource_identifier(&self) -> ResourceIdentifier<Category> {
            ResourceIdentifier::Plain {
                id: None,
                key: self.key.clone(),
            }
        }
    }

    fn reference_with_own_key(own_key: &str, target_key: &str) -> ResourceIdentifier<Category> {
        ResourceIdentifier::reference(
            None,
            Some(own_key.to_string()),
            Some(Category::with_key(target_key)),
        )
    }

    #[test]
    fn absent_identifiers_are_equal_in_both_modes() {
        let none: Option<&ResourceIdentifier<Category>> = None;
        assert!(are_resource_identifiers_equal(none, none, true));
        assert!(are_resource_identifiers_equal(none, none, false));
    }

    #[test]
    fn absent_vs_present_is_not_equal() {
        let id = ResourceIdentifier::<Category>::plain_with_key("cat-1");
        assert!(!are_resource_identifiers_equal::<Category, Category>(
            None,
            Some(&id),
            true
        ));
        assert!(!are_resource_identifiers_equal::<Category, Category>(
            Some(&id),
            None,
            false
        ));
    }

    #[test]
    fn key_mode_resolves_through_reference_target() {
        // Own key "k1" wraps a target with key "k2": key mode sees "k2".
        let reference = reference_with_own_key("k1", "k2");
        let plain = ResourceIdentifier::<Category>::plain_with_key("k2");

        assert!(are_resource_identifiers_equal(
            Some(&reference),
            Some(&plain),
            true
        ));
    }

    #[test]
    fn non_key_mode_uses_own_key_attribute() {
        let reference = reference_with_own_key("k1", "k2");
        let plain = ResourceIdentifier::<Category>::plain_with_key("k2");

        assert!(!are_resource_identifiers_equal(
            Some(&reference),
            Some(&plain),
            false
        ));

        let same_own_key = ResourceIdentifier::<Category>::plain_with_key("k1");
        assert!(are_resource_identifiers_equal(
            Some(&reference),
            Some(&same_own_key),
            false
        ));
    }

    #[test]
    fn non_key_mode_never_falls_back_to_id() {
        let by_id = ResourceIdentifier::<Category>::plain_with_id("same-id");
        let other_by_id = ResourceIdentifier::<Category>::plain_with_id("same-id");

        // Both have the same id but no key: equal because both comparison
        // keys are absent, not because ids matched.
        assert!(are_resource_identifiers_equal(
            Some(&by_id),
            Some(&other_by_id),
            false
        ));

        let keyed = ResourceIdentifier::<Category>::plain_with_key("cat-1");
        assert!(!are_resource_identifiers_equal(
            Some(&by_id),
            Some(&keyed),
            false
        ));
    }

    #[test]
    fn key_of_unresolved_reference_is_absent() {
        let unresolved = ResourceIdentifier::<Category>::unresolved_reference("abc");
        assert_eq!(get_key_of_resource_identifier(Some(&unresolved)), None);
        assert_eq!(get_key_of_resource_identifier::<Category>(None), None);
    }

    #[test]
    fn key_of_plain_identifier_is_own_key() {
        let plain = ResourceIdentifier::<Category>::plain_with_key("cat-1");
        assert_eq!(get_key_of_resource_identifier(Some(&plain)), Some("cat-1"));
    }

    #[test]
    fn referenceable_conversion_passes_absence_through() {
        let category = Category::with_key("cat-1");
        let id = to_resource_identifier_if_not_null(Some(&category));
        assert_eq!(id.as_ref().and_then(ResourceIdentifier::key_attr), Some("cat-1"));

        assert!(to_resource_identifier_if_not_null::<Category>(None).is_none());
    }
}
