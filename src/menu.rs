//! The numbered text menu of the `bset` console.
//!
//! The menu reads answers line by line from any [`BufRead`] and writes to any
//! [`Write`], so a session can be scripted in tests.

use crate::any_set::SetError;
use crate::bounded_set::CapacityPolicy;
use crate::config::Config;
use crate::element::{Kind, ParseElementError};
use crate::workspace::{SetOp, Workspace};
use log::debug;
use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;


/// Defaults applied when an answer is left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSettings {
    pub kind: Kind,
    pub capacity: NonZeroUsize,
    pub union_policy: CapacityPolicy,
}

impl Default for MenuSettings {
    fn default() -> Self {
        MenuSettings {
            kind: Kind::Integer,
            capacity: NonZeroUsize::new(10).unwrap_or(NonZeroUsize::MIN),
            union_policy: CapacityPolicy::Sum,
        }
    }
}

impl From<&Config> for MenuSettings {
    fn from(config: &Config) -> Self {
        MenuSettings {
            kind: config.kind,
            capacity: config.capacity,
            union_policy: config.union_policy,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Choice {
    Exit,
    Create,
    Add,
    Remove,
    Contains,
    Show,
    Combine(SetOp),
    Compare,
    Drop,
    Export,
}

const CHOICES: [(u32, &str, Choice); 13] = [
    (1, "Create set", Choice::Create),
    (2, "Add element", Choice::Add),
    (3, "Remove element", Choice::Remove),
    (4, "Check membership", Choice::Contains),
    (5, "Show sets", Choice::Show),
    (6, "Union", Choice::Combine(SetOp::Union)),
    (7, "Intersection", Choice::Combine(SetOp::Intersection)),
    (8, "Difference", Choice::Combine(SetOp::Difference)),
    (9, "Symmetric difference", Choice::Combine(SetOp::SymmetricDifference)),
    (10, "Compare sets", Choice::Compare),
    (11, "Drop set", Choice::Drop),
    (12, "Export as JSON", Choice::Export),
    (0, "Exit", Choice::Exit),
];

impl Choice {
    fn from_number(number: u32) -> Option<Choice> {
        CHOICES
            .iter()
            .find(|(n, _, _)| *n == number)
            .map(|(_, _, choice)| *choice)
    }
}

// Why a command stopped before completing.
enum Interrupt {
    EndOfInput,
    Io(io::Error),
    Set(SetError),
}

impl From<io::Error> for Interrupt {
    fn from(err: io::Error) -> Self {
        Interrupt::Io(err)
    }
}

impl From<SetError> for Interrupt {
    fn from(err: SetError) -> Self {
        Interrupt::Set(err)
    }
}

impl From<ParseElementError> for Interrupt {
    fn from(err: ParseElementError) -> Self {
        Interrupt::Set(err.into())
    }
}

impl From<serde_json::Error> for Interrupt {
    fn from(err: serde_json::Error) -> Self {
        Interrupt::Io(err.into())
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

pub struct Menu<'w, R, W> {
    workspace: &'w mut Workspace,
    settings: MenuSettings,
    input: R,
    output: W,
}

impl<'w, R: BufRead, W: Write> Menu<'w, R, W> {
    pub fn new(workspace: &'w mut Workspace, settings: MenuSettings, input: R, output: W) -> Self {
        Menu {
            workspace,
            settings,
            input,
            output,
        }
    }

    /// Runs the menu until the user exits or the input ends.
    ///
    /// Invalid choices and failed commands are reported and the menu is shown
    /// again. Only I/O failures end the loop with an error.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let result = self.prompt("Choose an option").and_then(|line| {
                let Ok(number) = line.trim().parse::<u32>() else {
                    writeln!(self.output, "please enter a number")?;
                    return Ok(true);
                };
                let Some(choice) = Choice::from_number(number) else {
                    writeln!(self.output, "unknown option {number}")?;
                    return Ok(true);
                };
                debug!("menu choice {choice:?}");
                if choice == Choice::Exit {
                    writeln!(self.output, "bye")?;
                    return Ok(false);
                }
                self.execute(choice)?;
                Ok(true)
            });
            match result {
                Ok(true) => {}
                Ok(false) | Err(Interrupt::EndOfInput) => return Ok(()),
                Err(Interrupt::Set(err)) => writeln!(self.output, "error: {err}")?,
                Err(Interrupt::Io(err)) => return Err(err),
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Bounded sets ===")?;
        for (number, label, _) in CHOICES {
            writeln!(self.output, "{number}. {label}")?;
        }
        Ok(())
    }

    /// Reads one answer without its line ending.
    fn prompt(&mut self, label: &str) -> Result<String, Interrupt> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Interrupt::EndOfInput);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(line)
    }

    fn prompt_name(&mut self, label: &str) -> Result<String, Interrupt> {
        Ok(self.prompt(label)?.trim().to_string())
    }

    fn prompt_kind(&mut self) -> Result<Kind, Interrupt> {
        let default = self.settings.kind;
        let answer = self.prompt(&format!("Kind (integer/char/real/symbol) [{default}]"))?;
        if answer.trim().is_empty() {
            return Ok(default);
        }
        Ok(answer.parse()?)
    }

    fn prompt_capacity(&mut self) -> Result<usize, Interrupt> {
        let default = self.settings.capacity;
        loop {
            let answer = self.prompt(&format!("Capacity [{default}]"))?;
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(default.get());
            }
            match answer.parse() {
                Ok(capacity) => return Ok(capacity),
                Err(_) => writeln!(self.output, "please enter a number")?,
            }
        }
    }

    fn execute(&mut self, choice: Choice) -> Result<(), Interrupt> {
        match choice {
            Choice::Create => self.create(),
            Choice::Add => self.add(),
            Choice::Remove => self.remove(),
            Choice::Contains => self.contains(),
            Choice::Show => self.show(),
            Choice::Combine(op) => self.combine(op),
            Choice::Compare => self.compare(),
            Choice::Drop => self.drop_set(),
            Choice::Export => self.export(),
            Choice::Exit => Ok(()),
        }
    }

    fn create(&mut self) -> Result<(), Interrupt> {
        let name = self.prompt_name("Set name")?;
        let kind = self.prompt_kind()?;
        let capacity = self.prompt_capacity()?;
        self.workspace.create(&name, kind, capacity)?;
        writeln!(self.output, "created {kind} set {name} with capacity {capacity}")?;
        Ok(())
    }

    fn add(&mut self) -> Result<(), Interrupt> {
        let name = self.prompt_name("Set name")?;
        self.workspace.get(&name)?;
        let value = self.prompt("Value")?;
        let set = self.workspace.get_mut(&name)?;
        let outcome = set.insert_str(&value)?;
        writeln!(self.output, "{}: {outcome}", value.trim())?;
        writeln!(self.output, "{name} = {set}")?;
        Ok(())
    }

    fn remove(&mut self) -> Result<(), Interrupt> {
        let name = self.prompt_name("Set name")?;
        self.workspace.get(&name)?;
        let value = self.prompt("Value")?;
        let set = self.workspace.get_mut(&name)?;
        if set.remove_str(&value)? {
            writeln!(self.output, "removed {}", value.trim())?;
        } else {
            writeln!(self.output, "{} is not in {name}", value.trim())?;
        }
        writeln!(self.output, "{name} = {set}")?;
        Ok(())
    }

    fn contains(&mut self) -> Result<(), Interrupt> {
        let name = self.prompt_name("Set name")?;
        self.workspace.get(&name)?;
        let value = self.prompt("Value")?;
        let verdict = if self.workspace.get(&name)?.contains_str(&value)? {
            "is in"
        } else {
            "is not in"
        };
        writeln!(self.output, "{} {verdict} {name}", value.trim())?;
        Ok(())
    }

    fn show(&mut self) -> Result<(), Interrupt> {
        if self.workspace.is_empty() {
            writeln!(self.output, "no sets")?;
        }
        for (name, set) in self.workspace.iter() {
            writeln!(
                self.output,
                "{name} ({}, {}/{}) = {set}",
                set.kind(),
                set.len(),
                set.capacity()
            )?;
        }
        Ok(())
    }

    fn combine(&mut self, op: SetOp) -> Result<(), Interrupt> {
        let left = self.prompt_name("First set")?;
        let right = self.prompt_name("Second set")?;
        let target = self.prompt_name("Store result as")?;
        let refused =
            self.workspace
                .combine(op, &left, &right, &target, self.settings.union_policy)?;
        writeln!(self.output, "{target} = {}", self.workspace.get(&target)?)?;
        if !refused.is_empty() {
            writeln!(self.output, "no room for: {}", refused.join(", "))?;
        }
        Ok(())
    }

    fn compare(&mut self) -> Result<(), Interrupt> {
        let left = self.prompt_name("First set")?;
        let right = self.prompt_name("Second set")?;
        let a = self.workspace.get(&left)?;
        let b = self.workspace.get(&right)?;
        let subset = a.is_subset(b)?;
        let superset = a.is_superset(b)?;
        let disjoint = a.is_disjoint(b)?;
        writeln!(self.output, "equal: {}", yes_no(a == b))?;
        writeln!(self.output, "subset: {}", yes_no(subset))?;
        writeln!(self.output, "superset: {}", yes_no(superset))?;
        writeln!(self.output, "disjoint: {}", yes_no(disjoint))?;
        Ok(())
    }

    fn drop_set(&mut self) -> Result<(), Interrupt> {
        let name = self.prompt_name("Set name")?;
        self.workspace.remove(&name)?;
        writeln!(self.output, "dropped {name}")?;
        Ok(())
    }

    fn export(&mut self) -> Result<(), Interrupt> {
        serde_json::to_writer_pretty(&mut self.output, &self.workspace.to_specs())?;
        writeln!(self.output)?;
        Ok(())
    }
}
