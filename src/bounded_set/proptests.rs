use crate::bounded_set::{BoundedSet, CapacityPolicy, InsertOutcome};
use proptest::collection::vec as pvec;
use proptest::prelude::*;
use std::collections::BTreeSet as StdBTreeSet;
use test_strategy::proptest;

#[derive(Debug, Clone)]
enum Operation {
    Insert(i64),
    Remove(i64),
    Contains(i64),
    PopFirst,
    PopLast,
    Clear,
}

// Values are drawn from a small range so that inserts collide and removals
// hit existing elements often.
fn operation_strategy() -> impl Strategy<Value = Operation> {
    let value = -20i64..20;
    prop_oneof![
        50 => value.clone().prop_map(Operation::Insert),
        20 => value.clone().prop_map(Operation::Remove),
        20 => value.prop_map(Operation::Contains),
        3 => Just(Operation::PopFirst),
        3 => Just(Operation::PopLast),
        1 => Just(Operation::Clear),
    ]
}

// Runs random operations against a bounded set and a std BTreeSet model that
// only admits new values while below capacity.
#[proptest(cases = 64)]
fn comprehensive(
    #[strategy(1usize..16)] capacity: usize,
    #[strategy(pvec(operation_strategy(), 1..500))] ops: Vec<Operation>,
) {
    let mut set: BoundedSet<i64> = BoundedSet::with_capacity(capacity).unwrap();
    let mut model = StdBTreeSet::new();

    for op in ops {
        execute_operation(&mut model, &mut set, capacity, op);
        prop_assert!(set.len() <= set.capacity());
        prop_assert_eq!(set.iter().copied().collect::<StdBTreeSet<_>>(), model.clone());
    }
}

// Executes the operation on both the bounded set and the model, verifying that
// the results agree.
fn execute_operation(
    model: &mut StdBTreeSet<i64>,
    set: &mut BoundedSet<i64>,
    capacity: usize,
    op: Operation,
) {
    match op {
        Operation::Insert(value) => {
            let expected = if model.contains(&value) {
                InsertOutcome::AlreadyPresent
            } else if model.len() >= capacity {
                InsertOutcome::Full
            } else {
                model.insert(value);
                InsertOutcome::Inserted
            };
            assert_eq!(set.insert(value), expected);
            assert_eq!(set.contains(&value), expected != InsertOutcome::Full);
        }
        Operation::Remove(value) => {
            assert_eq!(set.remove(&value), model.remove(&value));
            assert!(!set.contains(&value));
        }
        Operation::Contains(value) => {
            assert_eq!(set.contains(&value), model.contains(&value));
        }
        Operation::PopFirst => assert_eq!(set.pop_first(), model.pop_first()),
        Operation::PopLast => assert_eq!(set.pop_last(), model.pop_last()),
        Operation::Clear => {
            set.clear();
            model.clear();
        }
    }
}

#[proptest]
fn insert_twice_changes_nothing(
    #[strategy(1usize..10)] capacity: usize,
    #[strategy(pvec(any::<i64>(), 0..20))] values: Vec<i64>,
    value: i64,
) {
    let mut set: BoundedSet<i64> = BoundedSet::with_capacity(capacity).unwrap();
    set.insert_all(values);
    let first = set.insert(value);
    let snapshot = set.clone();
    let second = set.insert(value);

    prop_assert_eq!(&set, &snapshot);
    prop_assert_ne!(second, InsertOutcome::Inserted);
    if first != InsertOutcome::Full {
        prop_assert_eq!(second, InsertOutcome::AlreadyPresent);
    }
}

#[proptest]
fn union_is_commutative(
    #[strategy(pvec(-50i64..50, 0..30))] keys1: Vec<i64>,
    #[strategy(pvec(-50i64..50, 0..30))] keys2: Vec<i64>,
) {
    let a: BoundedSet<i64> = BoundedSet::from_elements(30, keys1).unwrap();
    let b: BoundedSet<i64> = BoundedSet::from_elements(30, keys2).unwrap();
    prop_assert_eq!(a.union(&b), b.union(&a));
    prop_assert_eq!(a.union(&b).capacity(), 60);
}

#[proptest]
fn equality_is_order_independent(#[strategy(pvec(any::<i64>(), 0..40))] keys: Vec<i64>) {
    let mut reversed = keys.clone();
    reversed.reverse();
    let a: BoundedSet<i64> = BoundedSet::from_elements(40, keys).unwrap();
    let b: BoundedSet<i64> = BoundedSet::from_elements(40, reversed).unwrap();
    prop_assert_eq!(&a, &b);
    prop_assert_eq!(&b, &a);
    prop_assert_eq!(&a, &a);
}

#[proptest]
fn max_union_respects_capacity(
    #[strategy(1usize..20)] capacity1: usize,
    #[strategy(1usize..20)] capacity2: usize,
    #[strategy(pvec(any::<i8>(), 0..40))] keys1: Vec<i8>,
    #[strategy(pvec(any::<i8>(), 0..40))] keys2: Vec<i8>,
) {
    let mut a: BoundedSet<i64> = BoundedSet::with_capacity(capacity1).unwrap();
    let mut b: BoundedSet<i64> = BoundedSet::with_capacity(capacity2).unwrap();
    a.insert_all(keys1.into_iter().map(i64::from));
    b.insert_all(keys2.into_iter().map(i64::from));

    let (union, refused) = a.union_with(&b, CapacityPolicy::Max);
    prop_assert_eq!(union.capacity(), capacity1.max(capacity2));
    prop_assert!(union.len() <= union.capacity());
    prop_assert!(a.is_subset(&union));

    // Every element of `b` either made it into the union or was refused.
    let full = a.union(&b);
    prop_assert_eq!(union.len() + refused.len(), full.len());
    for value in &refused {
        prop_assert!(b.contains(value));
        prop_assert!(!union.contains(value));
    }
}

#[proptest]
fn set_operations_match_std(
    #[strategy(pvec(-100i64..100, 0..60))] keys1: Vec<i64>,
    #[strategy(pvec(-100i64..100, 0..60))] keys2: Vec<i64>,
) {
    let std_set1: StdBTreeSet<i64> = keys1.iter().copied().collect();
    let std_set2: StdBTreeSet<i64> = keys2.iter().copied().collect();
    let set1: BoundedSet<i64> = BoundedSet::from_elements(60, keys1).unwrap();
    let set2: BoundedSet<i64> = BoundedSet::from_elements(60, keys2).unwrap();

    prop_assert_eq!(set1.is_subset(&set2), std_set1.is_subset(&std_set2));
    prop_assert_eq!(set1.is_superset(&set2), std_set1.is_superset(&std_set2));
    prop_assert_eq!(set1.is_disjoint(&set2), std_set1.is_disjoint(&std_set2));

    let intersection: Vec<_> = set1.intersection(&set2).into_iter().collect();
    let std_intersection: Vec<_> = std_set1.intersection(&std_set2).copied().collect();
    prop_assert_eq!(intersection, std_intersection);

    let union: Vec<_> = set1.union(&set2).into_iter().collect();
    let std_union: Vec<_> = std_set1.union(&std_set2).copied().collect();
    prop_assert_eq!(union, std_union);

    let difference: Vec<_> = set1.difference(&set2).into_iter().collect();
    let std_difference: Vec<_> = std_set1.difference(&std_set2).copied().collect();
    prop_assert_eq!(difference, std_difference);

    let symmetric_diff: Vec<_> = set1.symmetric_difference(&set2).into_iter().collect();
    let std_symmetric_diff: Vec<_> = std_set1.symmetric_difference(&std_set2).copied().collect();
    prop_assert_eq!(symmetric_diff, std_symmetric_diff);
}
