//! Command-line configuration of the `bset` console.

use crate::bounded_set::CapacityPolicy;
use crate::element::Kind;
use crate::workspace::{SetSpec, Workspace};
use anyhow::Context;
use clap::Parser;
use std::fs;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Interactive console for capacity-limited sets.
#[derive(Parser, Debug, Clone)]
#[command(name = "bset", version, about, long_about = None)]
pub struct Config {
    /// Element kind used when a new set is created without naming one.
    #[arg(long, value_enum, default_value_t = Kind::Integer)]
    pub kind: Kind,

    /// Capacity used when a new set is created without naming one.
    #[arg(long, default_value = "10")]
    pub capacity: NonZeroUsize,

    /// How the capacity of a union is derived from its operands.
    #[arg(long, value_enum, default_value_t = CapacityPolicy::Sum)]
    pub union_policy: CapacityPolicy,

    /// JSON file with an array of sets to load at startup.
    #[arg(long)]
    pub preload: Option<PathBuf>,

    /// Log specification, e.g. `info` or `bounded_sets=debug`.
    #[arg(long, env = "BSET_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Config {
    /// Builds the initial workspace, reading the preload file if one was given.
    pub fn load_workspace(&self) -> anyhow::Result<Workspace> {
        let Some(path) = &self.preload else {
            return Ok(Workspace::new());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read preload file {}", path.display()))?;
        let specs: Vec<SetSpec> = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse preload file {}", path.display()))?;
        Workspace::from_specs(specs)
            .with_context(|| format!("invalid set in preload file {}", path.display()))
    }
}
