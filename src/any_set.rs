//! A set whose element kind is chosen at runtime.
//!
//! The console works with sets of every [`Kind`] side by side. [`AnySet`] wraps
//! a [`BoundedSet`] of the matching element type and checks kinds whenever two
//! sets are combined.

use crate::bounded_set::{BoundedSet, CapacityPolicy, InitError, InsertOutcome};
use crate::element::{Element, Kind, ParseElementError, Real, Symbol};
use std::fmt;
use thiserror::Error;


pub type IntegerSet = BoundedSet<i64>;
pub type CharSet = BoundedSet<char>;
pub type RealSet = BoundedSet<Real>;
pub type SymbolSet = BoundedSet<Symbol>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    #[error(transparent)]
    Init(#[from] InitError),

    #[error(transparent)]
    Parse(#[from] ParseElementError),

    #[error("cannot combine {left} set with {right} set")]
    KindMismatch { left: Kind, right: Kind },

    #[error("no set named `{0}`")]
    UnknownSet(String),

    #[error("a set named `{0}` already exists")]
    DuplicateName(String),

    #[error("invalid set name `{0}`; names must be non-empty and contain no whitespace")]
    InvalidName(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnySet {
    Integer(IntegerSet),
    Char(CharSet),
    Real(RealSet),
    Symbol(SymbolSet),
}

// Runs `$body` on the inner set, whatever its kind.
macro_rules! with_set {
    ($set:expr, |$s:ident| $body:expr) => {
        match $set {
            AnySet::Integer($s) => $body,
            AnySet::Char($s) => $body,
            AnySet::Real($s) => $body,
            AnySet::Symbol($s) => $body,
        }
    };
}

// Runs `$body` on two inner sets of the same kind. `$wrap` is bound to the
// variant constructor of that kind.
macro_rules! same_kind {
    ($left:expr, $right:expr, |$a:ident, $b:ident, $wrap:ident| $body:expr) => {
        match ($left, $right) {
            (AnySet::Integer($a), AnySet::Integer($b)) => {
                #[allow(unused_variables)]
                let $wrap = AnySet::Integer;
                Ok($body)
            }
            (AnySet::Char($a), AnySet::Char($b)) => {
                #[allow(unused_variables)]
                let $wrap = AnySet::Char;
                Ok($body)
            }
            (AnySet::Real($a), AnySet::Real($b)) => {
                #[allow(unused_variables)]
                let $wrap = AnySet::Real;
                Ok($body)
            }
            (AnySet::Symbol($a), AnySet::Symbol($b)) => {
                #[allow(unused_variables)]
                let $wrap = AnySet::Symbol;
                Ok($body)
            }
            (left, right) => Err(SetError::KindMismatch {
                left: left.kind(),
                right: right.kind(),
            }),
        }
    };
}

fn parse_all<T: Element>(
    capacity: usize,
    elements: &[String],
) -> Result<BoundedSet<T>, SetError> {
    let values = elements
        .iter()
        .map(|element| T::parse(element))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(BoundedSet::from_elements(capacity, values)?)
}

fn render_all<'a, T: Element + 'a>(values: impl IntoIterator<Item = &'a T>) -> Vec<String> {
    values.into_iter().map(ToString::to_string).collect()
}

impl AnySet {
    /// Creates an empty set of the given kind.
    pub fn new(kind: Kind, capacity: usize) -> Result<Self, SetError> {
        Self::from_strings(kind, capacity, &[])
    }

    /// Creates a set of the given kind from textual elements.
    pub fn from_strings(kind: Kind, capacity: usize, elements: &[String]) -> Result<Self, SetError> {
        Ok(match kind {
            Kind::Integer => AnySet::Integer(parse_all(capacity, elements)?),
            Kind::Char => AnySet::Char(parse_all(capacity, elements)?),
            Kind::Real => AnySet::Real(parse_all(capacity, elements)?),
            Kind::Symbol => AnySet::Symbol(parse_all(capacity, elements)?),
        })
    }

    /// The element kind fixed when the set was created.
    pub fn kind(&self) -> Kind {
        match self {
            AnySet::Integer(_) => Kind::Integer,
            AnySet::Char(_) => Kind::Char,
            AnySet::Real(_) => Kind::Real,
            AnySet::Symbol(_) => Kind::Symbol,
        }
    }

    pub fn capacity(&self) -> usize {
        with_set!(self, |s| s.capacity())
    }

    pub fn len(&self) -> usize {
        with_set!(self, |s| s.len())
    }

    pub fn is_empty(&self) -> bool {
        with_set!(self, |s| s.is_empty())
    }

    /// The elements in ascending order, rendered as text.
    pub fn to_strings(&self) -> Vec<String> {
        with_set!(self, |s| render_all(s.iter()))
    }

    /// Parses `input` as an element of this set's kind and inserts it.
    pub fn insert_str(&mut self, input: &str) -> Result<InsertOutcome, SetError> {
        with_set!(self, |s| Ok(s.insert(Element::parse(input)?)))
    }

    /// Parses `input` and removes it, returning `true` if it was present.
    pub fn remove_str(&mut self, input: &str) -> Result<bool, SetError> {
        with_set!(self, |s| Ok(s.remove(&Element::parse(input)?)))
    }

    /// Parses `input` and checks whether it is in the set.
    pub fn contains_str(&self, input: &str) -> Result<bool, SetError> {
        with_set!(self, |s| Ok(s.contains(&Element::parse(input)?)))
    }

    /// Returns the union of both sets and the elements of `other` the result
    /// had no room for.
    pub fn union(&self, other: &AnySet, policy: CapacityPolicy) -> Result<(AnySet, Vec<String>), SetError> {
        same_kind!(self, other, |a, b, wrap| {
            let (set, refused) = a.union_with(b, policy);
            (wrap(set), render_all(&refused))
        })
    }

    pub fn intersection(&self, other: &AnySet) -> Result<AnySet, SetError> {
        same_kind!(self, other, |a, b, wrap| wrap(a.intersection(b)))
    }

    pub fn difference(&self, other: &AnySet) -> Result<AnySet, SetError> {
        same_kind!(self, other, |a, b, wrap| wrap(a.difference(b)))
    }

    pub fn symmetric_difference(&self, other: &AnySet) -> Result<AnySet, SetError> {
        same_kind!(self, other, |a, b, wrap| wrap(a.symmetric_difference(b)))
    }

    pub fn is_subset(&self, other: &AnySet) -> Result<bool, SetError> {
        same_kind!(self, other, |a, b, wrap| a.is_subset(b))
    }

    pub fn is_superset(&self, other: &AnySet) -> Result<bool, SetError> {
        same_kind!(self, other, |a, b, wrap| a.is_superset(b))
    }

    pub fn is_disjoint(&self, other: &AnySet) -> Result<bool, SetError> {
        same_kind!(self, other, |a, b, wrap| a.is_disjoint(b))
    }
}

impl fmt::Display for AnySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_set!(self, |s| fmt::Display::fmt(s, f))
    }
}

impl From<IntegerSet> for AnySet {
    fn from(set: IntegerSet) -> Self {
        AnySet::Integer(set)
    }
}

impl From<CharSet> for AnySet {
    fn from(set: CharSet) -> Self {
        AnySet::Char(set)
    }
}

impl From<RealSet> for AnySet {
    fn from(set: RealSet) -> Self {
        AnySet::Real(set)
    }
}

impl From<SymbolSet> for AnySet {
    fn from(set: SymbolSet) -> Self {
        AnySet::Symbol(set)
    }
}
