mod common;

use std::collections::BTreeSet;

use b_tree::BTree;
use common::{check_invariants, snapshot};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(u16),
    Delete(u16),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![(0u16..200).prop_map(Op::Insert), (0u16..200).prop_map(Op::Delete)]
}

/// The same distinct keys in two independent orders.
fn keys_in_two_orders() -> impl Strategy<Value = (Vec<i32>, Vec<i32>)> {
    prop::collection::btree_set(any::<i32>(), 0..200).prop_flat_map(|set| {
        let keys: Vec<i32> = set.into_iter().collect();
        (Just(keys.clone()).prop_shuffle(), Just(keys).prop_shuffle())
    })
}

proptest! {
    #[test]
    fn operations_match_model(degree in 2usize..6, ops in prop::collection::vec(op(), 0..400)) {
        let mut btree = BTree::new(degree).unwrap();
        let mut model = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(key) => prop_assert_eq!(btree.insert(key), model.insert(key)),
                Op::Delete(key) => prop_assert_eq!(btree.delete(&key), model.remove(&key)),
            }
            check_invariants(&btree);
        }

        let keys: Vec<u16> = btree.traverse().into_iter().copied().collect();
        prop_assert_eq!(keys, model.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn deleting_everything_empties_tree(degree in 2usize..6, (inserts, deletes) in keys_in_two_orders()) {
        let mut btree = BTree::new(degree).unwrap();
        for key in &inserts {
            prop_assert!(btree.insert(*key));
        }
        check_invariants(&btree);

        for key in &deletes {
            prop_assert!(btree.delete(key));
            prop_assert!(!btree.contains(key));
            check_invariants(&btree);
        }
        prop_assert!(btree.is_empty());
        prop_assert_eq!(btree.height(), 0);
        prop_assert!(btree.root().is_leaf());
    }

    #[test]
    fn absent_delete_is_noop(
        degree in 2usize..6,
        keys in prop::collection::btree_set(0i32..1000, 0..150),
        missing in 1000i32..2000,
    ) {
        let mut btree = BTree::new(degree).unwrap();
        for key in keys {
            btree.insert(key);
        }
        let before = snapshot(&btree);
        prop_assert!(!btree.delete(&missing));
        prop_assert_eq!(snapshot(&btree), before);
    }
}
