//! A repository of named sets.
//!
//! The console never keeps sets in global state: every command receives the
//! [`Workspace`] it operates on.

use crate::any_set::{AnySet, SetError};
use crate::bounded_set::CapacityPolicy;
use crate::element::Kind;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;


/// The serialized form of a named set, used for preloading and exporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetSpec {
    pub name: String,
    pub kind: Kind,
    pub capacity: usize,
    #[serde(default)]
    pub elements: Vec<String>,
}

/// A binary operation producing a new set.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SetOp {
    Union,
    Intersection,
    Difference,
    SymmetricDifference,
}

impl fmt::Display for SetOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SetOp::Union => "union",
            SetOp::Intersection => "intersection",
            SetOp::Difference => "difference",
            SetOp::SymmetricDifference => "symmetric difference",
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct Workspace {
    sets: BTreeMap<String, AnySet>,
}

fn validate_name(name: &str) -> Result<(), SetError> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(SetError::InvalidName(name.to_string()));
    }
    Ok(())
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a workspace from serialized sets. Fails on the first invalid
    /// spec or repeated name.
    pub fn from_specs(specs: impl IntoIterator<Item = SetSpec>) -> Result<Self, SetError> {
        let mut workspace = Self::new();
        for spec in specs {
            validate_name(&spec.name)?;
            if workspace.sets.contains_key(&spec.name) {
                return Err(SetError::DuplicateName(spec.name));
            }
            let set = AnySet::from_strings(spec.kind, spec.capacity, &spec.elements)?;
            workspace.sets.insert(spec.name, set);
        }
        info!("loaded {} set(s)", workspace.len());
        Ok(workspace)
    }

    /// Serializes every set, ordered by name.
    pub fn to_specs(&self) -> Vec<SetSpec> {
        self.sets
            .iter()
            .map(|(name, set)| SetSpec {
                name: name.clone(),
                kind: set.kind(),
                capacity: set.capacity(),
                elements: set.to_strings(),
            })
            .collect()
    }

    /// Creates an empty set under a new name.
    pub fn create(&mut self, name: &str, kind: Kind, capacity: usize) -> Result<&mut AnySet, SetError> {
        validate_name(name)?;
        match self.sets.entry(name.to_string()) {
            btree_map::Entry::Occupied(_) => Err(SetError::DuplicateName(name.to_string())),
            btree_map::Entry::Vacant(entry) => {
                let set = AnySet::new(kind, capacity)?;
                debug!("created {kind} set `{name}` with capacity {capacity}");
                Ok(entry.insert(set))
            }
        }
    }

    pub fn get(&self, name: &str) -> Result<&AnySet, SetError> {
        self.sets
            .get(name)
            .ok_or_else(|| SetError::UnknownSet(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut AnySet, SetError> {
        self.sets
            .get_mut(name)
            .ok_or_else(|| SetError::UnknownSet(name.to_string()))
    }

    /// Removes a set and returns it.
    pub fn remove(&mut self, name: &str) -> Result<AnySet, SetError> {
        self.sets
            .remove(name)
            .ok_or_else(|| SetError::UnknownSet(name.to_string()))
    }

    /// Evaluates `left <op> right` and stores the result as `target`,
    /// replacing any set already stored under that name.
    ///
    /// Returns the elements a union had no room for.
    pub fn combine(
        &mut self,
        op: SetOp,
        left: &str,
        right: &str,
        target: &str,
        policy: CapacityPolicy,
    ) -> Result<Vec<String>, SetError> {
        validate_name(target)?;
        let a = self.get(left)?;
        let b = self.get(right)?;
        let (result, refused) = match op {
            SetOp::Union => a.union(b, policy)?,
            SetOp::Intersection => (a.intersection(b)?, Vec::new()),
            SetOp::Difference => (a.difference(b)?, Vec::new()),
            SetOp::SymmetricDifference => (a.symmetric_difference(b)?, Vec::new()),
        };
        debug!("{target} = {left} {op} {right}: {result}");
        self.sets.insert(target.to_string(), result);
        Ok(refused)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnySet)> {
        self.sets.iter().map(|(name, set)| (name.as_str(), set))
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
