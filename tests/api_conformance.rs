use bounded_sets::{AnySet, BoundedSet, InsertOutcome, Kind, Real, SetError, Workspace};

#[test]
fn api_conformance_bounded_set() {
    let n = 10_i64;
    // Large enough that the capacity never interferes with the comparison.
    let mut bounded: BoundedSet<i64> = BoundedSet::with_capacity(n as usize).unwrap();
    let mut std = std::collections::BTreeSet::new();

    // Insert elements.
    // Note: bounded.insert() returns an InsertOutcome, std.insert() returns bool.
    for i in 0..n {
        assert_eq!(bounded.insert(i).is_inserted(), std.insert(i));
    }

    // Contains.
    for i in 0..n {
        assert_eq!(bounded.contains(&i), std.contains(&i));
    }

    // is_empty and len.
    assert_eq!(bounded.is_empty(), std.is_empty());
    assert_eq!(bounded.len(), std.len());

    // First and last.
    assert_eq!(bounded.first(), std.first());
    assert_eq!(bounded.last(), std.last());

    // Iteration.
    let bounded_items: Vec<_> = bounded.iter().copied().collect();
    let std_items: Vec<_> = std.iter().copied().collect();
    assert_eq!(bounded_items, std_items);

    // Range.
    let bounded_range: Vec<_> = bounded.range(3..7).copied().collect();
    let std_range: Vec<_> = std.range(3..7).copied().collect();
    assert_eq!(bounded_range, std_range);

    // pop_first / pop_last.
    let mut bounded_temp = bounded.clone();
    let mut std_temp = std.clone();
    assert_eq!(bounded_temp.pop_first(), std_temp.pop_first());
    assert_eq!(bounded_temp.pop_last(), std_temp.pop_last());

    // Remove elements.
    for i in 0..n {
        assert_eq!(bounded.remove(&i), std.remove(&i));
    }
    assert!(bounded.is_empty());
    assert!(std.is_empty());

    // Clear.
    for i in 0..n {
        bounded.insert(i);
        std.insert(i);
    }
    bounded.clear();
    std.clear();
    assert!(bounded.is_empty());
    assert!(std.is_empty());

    // Reinsert for set operations.
    for i in (0..n).filter(|i| i % 2 == 0) {
        bounded.insert(i);
        std.insert(i);
    }

    let mut bounded2: BoundedSet<i64> = BoundedSet::with_capacity(n as usize).unwrap();
    let mut std2 = std::collections::BTreeSet::new();
    for i in (0..n).filter(|i| i % 3 == 0) {
        bounded2.insert(i);
        std2.insert(i);
    }

    // is_disjoint, is_subset, is_superset.
    assert_eq!(bounded.is_disjoint(&bounded2), std.is_disjoint(&std2));
    assert_eq!(bounded.is_subset(&bounded2), std.is_subset(&std2));
    assert_eq!(bounded.is_superset(&bounded2), std.is_superset(&std2));

    // union
    let bounded_union: Vec<_> = bounded.union(&bounded2).into_iter().collect();
    let std_union: Vec<_> = std.union(&std2).copied().collect();
    assert_eq!(bounded_union, std_union);

    // intersection
    let bounded_inter: Vec<_> = bounded.intersection(&bounded2).into_iter().collect();
    let std_inter: Vec<_> = std.intersection(&std2).copied().collect();
    assert_eq!(bounded_inter, std_inter);

    // difference
    let bounded_diff: Vec<_> = bounded.difference(&bounded2).into_iter().collect();
    let std_diff: Vec<_> = std.difference(&std2).copied().collect();
    assert_eq!(bounded_diff, std_diff);

    // symmetric_difference
    let bounded_sym: Vec<_> = bounded.symmetric_difference(&bounded2).into_iter().collect();
    let std_sym: Vec<_> = std.symmetric_difference(&std2).copied().collect();
    assert_eq!(bounded_sym, std_sym);
}

#[test]
fn capacity_is_the_only_divergence() {
    let mut bounded: BoundedSet<char> = BoundedSet::with_capacity(2).unwrap();
    let mut std = std::collections::BTreeSet::new();

    for c in ['a', 'b', 'c'] {
        std.insert(c);
        bounded.insert(c);
    }
    assert_eq!(std.len(), 3);
    assert_eq!(bounded.len(), 2);
    assert_eq!(bounded.insert('c'), InsertOutcome::Full);
    assert_eq!(bounded.insert('a'), InsertOutcome::AlreadyPresent);
}

#[test]
fn kinds_share_one_workspace() {
    let mut workspace = Workspace::new();
    workspace.create("r", Kind::Real, 2).unwrap();
    workspace.create("s", Kind::Symbol, 2).unwrap();

    let reals = workspace.get_mut("r").unwrap();
    assert!(reals.insert_str("2.5").unwrap().is_inserted());
    assert!(reals.insert_str("-0").unwrap().is_inserted());
    assert_eq!(reals.insert_str("0").unwrap(), InsertOutcome::AlreadyPresent);

    let expected: BoundedSet<Real> = BoundedSet::from_elements(
        2,
        [Real::new(0.0).unwrap(), Real::new(2.5).unwrap()],
    )
    .unwrap();
    assert_eq!(workspace.get("r").unwrap(), &AnySet::Real(expected));

    let err = workspace
        .get("r")
        .unwrap()
        .is_subset(workspace.get("s").unwrap())
        .unwrap_err();
    assert_eq!(
        err,
        SetError::KindMismatch {
            left: Kind::Real,
            right: Kind::Symbol
        }
    );
}
