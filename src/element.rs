use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;


/// A trait for values that can be stored in a [`BoundedSet`](crate::BoundedSet).
///
/// Besides a total order, an element knows which [`Kind`] it belongs to and how
/// to parse itself from the text typed at the console.
pub trait Element: Ord + Clone + fmt::Debug + fmt::Display {
    /// The kind tag of the type.
    const KIND: Kind;

    /// Parses an element from one line of user input.
    fn parse(input: &str) -> Result<Self, ParseElementError>;
}

/// The element kinds a kind-erased set can hold.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Signed 64-bit integers.
    Integer,
    /// Single Unicode scalar values.
    Char,
    /// Real numbers other than NaN.
    Real,
    /// Non-empty words without whitespace.
    Symbol,
}

impl Kind {
    /// The lowercase name used on the command line and in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Integer => "integer",
            Kind::Char => "char",
            Kind::Real => "real",
            Kind::Symbol => "symbol",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        <Kind as clap::ValueEnum>::from_str(s, true)
            .map_err(|_| ParseElementError::UnknownKind(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseElementError {
    #[error("empty input")]
    Empty,

    #[error("`{0}` is not an integer")]
    InvalidInteger(String),

    #[error("`{0}` is not a single character")]
    NotASingleChar(String),

    #[error("`{0}` is not a real number")]
    InvalidReal(String),

    #[error("NaN cannot be stored in a set")]
    NotANumber,

    #[error("`{0}` is not a symbol (symbols cannot contain whitespace)")]
    InvalidSymbol(String),

    #[error("unknown kind `{0}`; expected one of integer, char, real, symbol")]
    UnknownKind(String),
}

fn non_empty(input: &str) -> Result<&str, ParseElementError> {
    let input = input.trim();
    if input.is_empty() {
        Err(ParseElementError::Empty)
    } else {
        Ok(input)
    }
}

impl Element for i64 {
    const KIND: Kind = Kind::Integer;

    fn parse(input: &str) -> Result<Self, ParseElementError> {
        let input = non_empty(input)?;
        input
            .parse()
            .map_err(|_| ParseElementError::InvalidInteger(input.to_string()))
    }
}

impl Element for char {
    const KIND: Kind = Kind::Char;

    fn parse(input: &str) -> Result<Self, ParseElementError> {
        // Any single character is taken as is, including a space or a line
        // feed. Otherwise only the line ending is stripped.
        if let Some(c) = single_char(input) {
            return Ok(c);
        }
        let raw = input.trim_end_matches(['\r', '\n']);
        match single_char(raw) {
            Some(c) => Ok(c),
            None if raw.is_empty() => Err(ParseElementError::Empty),
            None => Err(ParseElementError::NotASingleChar(raw.to_string())),
        }
    }
}

fn single_char(input: &str) -> Option<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// A non-empty word without whitespace.
///
/// ```rust
/// use bounded_sets::{ParseElementError, Symbol};
///
/// let apple = Symbol::new("apple").unwrap();
/// assert_eq!(apple.as_str(), "apple");
///
/// assert_eq!(Symbol::new(""), Err(ParseElementError::Empty));
/// assert!(Symbol::new("two words").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Fails with [`ParseElementError::Empty`] or
    /// [`ParseElementError::InvalidSymbol`] if `value` is not a single word.
    pub fn new(value: impl Into<String>) -> Result<Self, ParseElementError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ParseElementError::Empty);
        }
        if value.chars().any(char::is_whitespace) {
            return Err(ParseElementError::InvalidSymbol(value));
        }
        Ok(Symbol(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Symbol {
    type Error = ParseElementError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Symbol::new(value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ParseElementError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Symbol::new(value)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Symbol::new(value).map_err(serde::de::Error::custom)
    }
}

impl Element for Symbol {
    const KIND: Kind = Kind::Symbol;

    fn parse(input: &str) -> Result<Self, ParseElementError> {
        Symbol::new(non_empty(input)?)
    }
}

/// An `f64` with a total order.
///
/// NaN is rejected on construction and `-0.0` is stored as `0.0`, so equality
/// agrees with numeric equality.
#[derive(Copy, Clone, Debug, Serialize)]
#[serde(transparent)]
pub struct Real(f64);

impl Real {
    /// Fails with [`ParseElementError::NotANumber`] for NaN.
    pub fn new(value: f64) -> Result<Self, ParseElementError> {
        if value.is_nan() {
            return Err(ParseElementError::NotANumber);
        }
        // `-0.0 + 0.0` is `0.0`.
        Ok(Real(value + 0.0))
    }

    /// The stored value. Never NaN.
    pub fn get(&self) -> f64 {
        self.0
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Real {}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Real {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<f64> for Real {
    type Error = ParseElementError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Real::new(value)
    }
}

impl From<Real> for f64 {
    fn from(real: Real) -> Self {
        real.0
    }
}

impl<'de> Deserialize<'de> for Real {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Real::new(value).map_err(serde::de::Error::custom)
    }
}

impl Element for Real {
    const KIND: Kind = Kind::Real;

    fn parse(input: &str) -> Result<Self, ParseElementError> {
        let input = non_empty(input)?;
        let value: f64 = input
            .parse()
            .map_err(|_| ParseElementError::InvalidReal(input.to_string()))?;
        Real::new(value)
    }
}
