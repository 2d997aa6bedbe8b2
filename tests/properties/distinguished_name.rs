//! Property tests for distinguished names.

use proptest::prelude::*;

use xanadu::DistinguishedName;

use crate::common::root;

/// OU names, including the characters that need escaping.
/// Leading and trailing spaces are excluded: RDN values are trimmed.
fn ou_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex(r#"[A-Za-z0-9éÉ]([A-Za-z0-9éÉ ,+=;<>"\\_-]{0,10}[A-Za-z0-9éÉ])?"#)
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a child's leaf name is the name it was created with, and
    /// its parent is where it was created.
    #[test]
    fn property_child_leaf_and_parent(name in ou_name()) {
        let parent = root();
        let child = parent.child_ou(&name);

        prop_assert_eq!(child.leaf_name(), name);
        prop_assert_eq!(child.parent(), Some(parent.clone()));
        prop_assert_eq!(child.depth(), parent.depth() + 1);
        prop_assert!(child.is_within(&parent));
        prop_assert!(!parent.is_within(&child));
    }

    /// PROPERTY: escaping survives printing and re-parsing.
    #[test]
    fn property_escaped_child_reparses(names in proptest::collection::vec(ou_name(), 1..4)) {
        let mut path = root();
        for name in &names {
            path = path.child_ou(name);
        }

        let reparsed = DistinguishedName::parse(&path.to_string()).unwrap();

        prop_assert_eq!(&reparsed, &path);
        prop_assert_eq!(reparsed.leaf_name(), names.last().cloned().unwrap());
    }

    /// PROPERTY: equality ignores ASCII case.
    #[test]
    fn property_equality_ignores_ascii_case(name in ou_name()) {
        let lower = root().child_ou(&name.to_ascii_lowercase());
        let upper = root().child_ou(&name.to_ascii_uppercase());
        prop_assert_eq!(lower, upper);
    }
}
