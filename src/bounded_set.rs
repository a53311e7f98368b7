//! This module implements a set whose number of elements is limited by a
//! capacity fixed at construction.

use crate::element::Element;
use log::{debug, warn};
use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeBounds;
use thiserror::Error;

#[cfg(test)]
mod proptests;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitError {
    /// A set must be able to hold at least one element.
    #[error("capacity must be at least 1")]
    ZeroCapacity,
    /// The initial elements do not fit into the requested capacity.
    #[error("{len} distinct initial elements exceed the capacity of {capacity}")]
    CapacityExceeded { capacity: usize, len: usize },
}

/// The result of [`BoundedSet::insert`].
///
/// Refusing an element is a normal outcome, not an error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The element was added.
    Inserted,
    /// The element was already in the set; nothing changed.
    AlreadyPresent,
    /// The set is at capacity and the element is new; nothing changed.
    Full,
}

impl InsertOutcome {
    /// Returns `true` if the set changed.
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted)
    }
}

impl fmt::Display for InsertOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InsertOutcome::Inserted => "added",
            InsertOutcome::AlreadyPresent => "already present",
            InsertOutcome::Full => "set is full",
        })
    }
}

/// How the capacity of a union is derived from the capacities of its operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CapacityPolicy {
    /// The sum of both capacities. Every element of both operands fits.
    #[default]
    Sum,
    /// The larger of both capacities. Elements that do not fit are refused.
    Max,
}

impl CapacityPolicy {
    /// The capacity of a union of sets with capacities `a` and `b`.
    pub fn combine(&self, a: usize, b: usize) -> usize {
        match self {
            CapacityPolicy::Sum => a.saturating_add(b),
            CapacityPolicy::Max => a.max(b),
        }
    }
}

/// An iterator over the elements of a [`BoundedSet`], in ascending order.
pub struct Iter<'a, T> {
    iter_internal: btree_set::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter_internal.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter_internal.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter_internal.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// A set holding at most `capacity` distinct elements.
///
/// # Overview
///
/// Elements are kept in ascending order. Two sets are equal when they hold the
/// same elements; their capacities are not compared.
///
/// # Examples
///
/// ```rust
/// use bounded_sets::{BoundedSet, InsertOutcome};
///
/// let mut set: BoundedSet<i64> = BoundedSet::from_elements(2, [1, 2]).unwrap();
/// assert_eq!(set.insert(3), InsertOutcome::Full);
/// assert_eq!(set.insert(2), InsertOutcome::AlreadyPresent);
///
/// set.remove(&1);
/// assert_eq!(set.insert(3), InsertOutcome::Inserted);
/// assert_eq!(set.to_string(), "{2, 3}");
/// ```
///
/// ## Combining sets
///
/// ```rust
/// use bounded_sets::{BoundedSet, CapacityPolicy, Symbol};
///
/// let symbols = |words: [&str; 2]| words.map(|w| Symbol::new(w).unwrap());
/// let a = BoundedSet::from_elements(2, symbols(["a", "b"])).unwrap();
/// let b = BoundedSet::from_elements(2, symbols(["b", "c"])).unwrap();
///
/// let union = a.union(&b);
/// assert_eq!(union.len(), 3);
/// assert_eq!(union.capacity(), 4);
///
/// // With the `Max` policy, `c` no longer fits.
/// let (union, refused) = a.union_with(&b, CapacityPolicy::Max);
/// assert_eq!(union.to_string(), "{a, b}");
/// assert_eq!(refused, vec![Symbol::new("c").unwrap()]);
/// ```
#[derive(Clone, Debug)]
pub struct BoundedSet<T> {
    capacity: usize,
    elements: BTreeSet<T>,
}

impl<T: Element> BoundedSet<T> {
    /// Creates an empty set able to hold `capacity` elements.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bounded_sets::{BoundedSet, InitError};
    ///
    /// let set: BoundedSet<char> = BoundedSet::with_capacity(3).unwrap();
    /// assert!(set.is_empty());
    /// assert_eq!(BoundedSet::<char>::with_capacity(0).unwrap_err(), InitError::ZeroCapacity);
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, InitError> {
        if capacity == 0 {
            return Err(InitError::ZeroCapacity);
        }
        Ok(BoundedSet {
            capacity,
            elements: BTreeSet::new(),
        })
    }

    /// Creates a set from initial elements. Duplicates collapse.
    ///
    /// Fails if the distinct initial elements do not fit into `capacity`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bounded_sets::{BoundedSet, InitError};
    ///
    /// let set: BoundedSet<i64> = BoundedSet::from_elements(2, [1, 1, 2]).unwrap();
    /// assert_eq!(set.len(), 2);
    ///
    /// assert_eq!(
    ///     BoundedSet::<i64>::from_elements(2, [1, 2, 3]).unwrap_err(),
    ///     InitError::CapacityExceeded { capacity: 2, len: 3 }
    /// );
    /// ```
    pub fn from_elements(
        capacity: usize,
        elements: impl IntoIterator<Item = T>,
    ) -> Result<Self, InitError> {
        if capacity == 0 {
            return Err(InitError::ZeroCapacity);
        }
        let elements: BTreeSet<T> = elements.into_iter().collect();
        if elements.len() > capacity {
            return Err(InitError::CapacityExceeded {
                capacity,
                len: elements.len(),
            });
        }
        Ok(BoundedSet { capacity, elements })
    }

    /// Adds a value to the set unless it is already there or the set is full.
    ///
    /// # Complexity
    /// O(log n), where n is the number of elements in the set.
    pub fn insert(&mut self, value: T) -> InsertOutcome {
        let outcome = if self.elements.contains(&value) {
            InsertOutcome::AlreadyPresent
        } else if self.is_full() {
            InsertOutcome::Full
        } else {
            InsertOutcome::Inserted
        };
        debug!("insert {value}: {outcome}");
        if outcome.is_inserted() {
            self.elements.insert(value);
        }
        outcome
    }

    /// Inserts every value in order and returns how many were added.
    pub fn insert_all(&mut self, values: impl IntoIterator<Item = T>) -> usize {
        let mut added = 0;
        for value in values {
            if self.insert(value).is_inserted() {
                added += 1;
            }
        }
        added
    }

    /// Removes a value from the set, returning `true` if it was present.
    ///
    /// # Complexity
    /// O(log n), where n is the number of elements in the set.
    pub fn remove(&mut self, value: &T) -> bool {
        let removed = self.elements.remove(value);
        debug!("remove {value}: {}", if removed { "removed" } else { "absent" });
        removed
    }

    /// Returns `true` if the value is in the set.
    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }

    /// The maximum number of elements the set can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    /// O(1)
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if no new element can be added.
    pub fn is_full(&self) -> bool {
        self.elements.len() >= self.capacity
    }

    /// The number of elements that can still be added.
    pub fn remaining(&self) -> usize {
        self.capacity - self.elements.len()
    }

    /// Returns the smallest element.
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the largest element.
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Removes and returns the smallest element, freeing one slot.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bounded_sets::BoundedSet;
    ///
    /// let mut set: BoundedSet<i64> = BoundedSet::from_elements(2, [4, 9]).unwrap();
    /// assert_eq!(set.pop_first(), Some(4));
    /// assert_eq!(set.remaining(), 1);
    /// ```
    pub fn pop_first(&mut self) -> Option<T> {
        self.elements.pop_first()
    }

    /// Removes and returns the largest element, freeing one slot.
    pub fn pop_last(&mut self) -> Option<T> {
        self.elements.pop_last()
    }

    /// Removes all elements. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns an iterator over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            iter_internal: self.elements.iter(),
        }
    }

    /// Returns an iterator over the elements within `range`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bounded_sets::BoundedSet;
    ///
    /// let set: BoundedSet<i64> = BoundedSet::from_elements(5, [1, 2, 3, 4]).unwrap();
    /// let range: Vec<_> = set.range(2..4).copied().collect();
    /// assert_eq!(range, vec![2, 3]);
    /// ```
    pub fn range(&self, range: impl RangeBounds<T>) -> btree_set::Range<'_, T> {
        self.elements.range(range)
    }

    /// Returns the union of this set and another.
    ///
    /// The capacity of the result is the sum of both capacities, so no element
    /// is ever refused. See [`BoundedSet::union_with`] for other policies.
    ///
    /// # Complexity
    /// O(n + m), where n and m are the sizes of the two sets.
    pub fn union(&self, other: &BoundedSet<T>) -> BoundedSet<T> {
        let (set, refused) = self.union_with(other, CapacityPolicy::Sum);
        debug_assert!(refused.is_empty());
        set
    }

    /// Returns the union of this set and another, sized by `policy`.
    ///
    /// Every element of `self` is kept. The elements of `other` are then added
    /// in ascending order until the result is full; the ones that did not fit
    /// are returned alongside the result.
    pub fn union_with(&self, other: &BoundedSet<T>, policy: CapacityPolicy) -> (BoundedSet<T>, Vec<T>) {
        let mut result = BoundedSet {
            capacity: policy.combine(self.capacity, other.capacity),
            elements: self.elements.clone(),
        };
        let mut refused = Vec::new();
        for value in other.iter() {
            if result.contains(value) {
                continue;
            }
            if result.is_full() {
                refused.push(value.clone());
            } else {
                result.elements.insert(value.clone());
            }
        }
        if !refused.is_empty() {
            warn!(
                "union with capacity {} refused {} element(s)",
                result.capacity,
                refused.len()
            );
        }
        (result, refused)
    }

    /// Returns the elements common to both sets. The result has the capacity
    /// of `self`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bounded_sets::BoundedSet;
    ///
    /// let a: BoundedSet<i64> = BoundedSet::from_elements(3, [1, 2, 3]).unwrap();
    /// let b: BoundedSet<i64> = BoundedSet::from_elements(3, [2, 3, 4]).unwrap();
    /// assert_eq!(a.intersection(&b).to_string(), "{2, 3}");
    /// ```
    pub fn intersection(&self, other: &BoundedSet<T>) -> BoundedSet<T> {
        BoundedSet {
            capacity: self.capacity,
            elements: self.elements.intersection(&other.elements).cloned().collect(),
        }
    }

    /// Returns the elements of `self` that are not in `other`. The result has
    /// the capacity of `self`.
    pub fn difference(&self, other: &BoundedSet<T>) -> BoundedSet<T> {
        BoundedSet {
            capacity: self.capacity,
            elements: self.elements.difference(&other.elements).cloned().collect(),
        }
    }

    /// Returns the elements that are in exactly one of the sets. The result
    /// has the sum of both capacities.
    pub fn symmetric_difference(&self, other: &BoundedSet<T>) -> BoundedSet<T> {
        BoundedSet {
            capacity: CapacityPolicy::Sum.combine(self.capacity, other.capacity),
            elements: self
                .elements
                .symmetric_difference(&other.elements)
                .cloned()
                .collect(),
        }
    }

    /// Returns `true` if the sets have no element in common.
    pub fn is_disjoint(&self, other: &BoundedSet<T>) -> bool {
        self.elements.is_disjoint(&other.elements)
    }

    /// Returns `true` if every element of `self` is in `other`.
    pub fn is_subset(&self, other: &BoundedSet<T>) -> bool {
        self.elements.is_subset(&other.elements)
    }

    /// Returns `true` if every element of `other` is in `self`.
    pub fn is_superset(&self, other: &BoundedSet<T>) -> bool {
        self.elements.is_superset(&other.elements)
    }
}

impl<T: Ord> PartialEq for BoundedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Ord> Eq for BoundedSet<T> {}

impl<T: fmt::Display> fmt::Display for BoundedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, value) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("}")
    }
}

impl<'a, T: Element> IntoIterator for &'a BoundedSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for BoundedSet<T> {
    type Item = T;
    type IntoIter = btree_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<T: Serialize> Serialize for BoundedSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BoundedSet", 2)?;
        state.serialize_field("capacity", &self.capacity)?;
        state.serialize_field("elements", &self.elements)?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSet<T> {
    capacity: usize,
    elements: Vec<T>,
}

impl<'de, T> Deserialize<'de> for BoundedSet<T>
where
    T: Element + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawSet::<T>::deserialize(deserializer)?;
        BoundedSet::from_elements(raw.capacity, raw.elements).map_err(de::Error::custom)
    }
}
