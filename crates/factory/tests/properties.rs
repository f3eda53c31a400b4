pub mod fixtures;

use fabrik_factory::{DuplicatePolicy, Factory, StringFactory};
use fixtures::{Circle, Point, Shape, Square};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn register_by_index(factory: &mut StringFactory<dyn Shape>, key: &str, which: u8) -> bool {
    match which % 3 {
        0 => factory.register::<Circle>(key).is_ok(),
        1 => factory.register::<Square>(key).is_ok(),
        _ => factory.register::<Point>(key).is_ok(),
    }
}

proptest! {
    #[test]
    fn unregistered_keys_never_create(
        registered in prop::collection::btree_set("[a-m]{1,6}", 0..16),
        missing in "[n-z]{1,6}",
    ) {
        let mut factory = StringFactory::<dyn Shape>::new();
        for key in &registered {
            factory.register::<Circle>(key.as_str()).unwrap();
        }

        prop_assert!(factory.create_unique(missing.as_str()).is_none());
        prop_assert!(factory.create_shared(missing.as_str()).is_none());
        prop_assert!(!factory.list_keys().contains(&missing));
    }

    #[test]
    fn list_keys_is_sorted_distinct_set(
        entries in prop::collection::vec(("[a-f]{1,3}", any::<u8>()), 0..32),
        replace in any::<bool>(),
    ) {
        let policy = if replace { DuplicatePolicy::Replace } else { DuplicatePolicy::Reject };
        let mut factory = StringFactory::<dyn Shape>::with_policy(policy);
        let mut expected = BTreeSet::new();

        for (key, which) in &entries {
            let accepted = register_by_index(&mut factory, key, *which);
            let fresh = expected.insert(key.clone());
            prop_assert_eq!(accepted, fresh || replace);
        }

        let keys = factory.list_keys();
        prop_assert_eq!(keys.len(), expected.len());
        prop_assert_eq!(keys, expected.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn bound_type_is_stable_across_calls(which in any::<u8>(), calls in 1usize..32) {
        let mut factory = StringFactory::<dyn Shape>::new();
        register_by_index(&mut factory, "shape", which);

        let expected = factory.create_unique("shape").unwrap().kind();
        for _ in 0..calls {
            prop_assert_eq!(factory.create_unique("shape").unwrap().kind(), expected);
            prop_assert_eq!(factory.create_shared("shape").unwrap().kind(), expected);
        }
    }

    #[test]
    fn integer_keys_come_back_ascending(keys in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut factory = Factory::<i32, dyn Shape>::with_policy(DuplicatePolicy::Replace);
        for key in &keys {
            factory.register::<Point>(*key).unwrap();
        }

        let listed = factory.list_keys();
        prop_assert!(listed.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(listed.len(), keys.iter().collect::<BTreeSet<_>>().len());
    }
}
