#![doc = include_str!("../README.md")]
pub mod any_set;
pub mod bounded_set;
pub mod config;
pub mod element;
pub mod logging;
pub mod menu;
pub mod workspace;

pub use any_set::{AnySet, CharSet, IntegerSet, RealSet, SetError, SymbolSet};
pub use bounded_set::{BoundedSet, CapacityPolicy, InitError, InsertOutcome};
pub use element::{Element, Kind, ParseElementError, Real, Symbol};
pub use workspace::{SetOp, SetSpec, Workspace};
