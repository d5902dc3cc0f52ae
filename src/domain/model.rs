use crate::utils::error::Result;
use crate::utils::validation::parse_integer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Smallest value that has a Roman numeral representation.
pub const MIN_VALUE: i64 = 1;

/// Largest value that has a Roman numeral representation.
pub const MAX_VALUE: i64 = 4999;

/// Failure of one of the two core conversions. Each variant carries the
/// rejected input verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Invalid Number {0}")]
    InvalidNumber(i64),

    #[error("Invalid Roman Numeral {0}")]
    InvalidNumeral(String),
}

/// Menu choice offered by the interactive prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    ToNumeral,
    ToNumber,
}

impl Direction {
    /// Reads a menu selection as an integer, so `01` and `+1` pick option 1.
    pub fn from_option(option: &str) -> Option<Self> {
        match parse_integer(option).ok()? {
            1 => Some(Direction::ToNumeral),
            2 => Some(Direction::ToNumber),
            _ => None,
        }
    }
}

/// How numerals are turned back into numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeStrategy {
    /// Compare against the encoding of every value in range.
    #[default]
    Search,
    /// Read one fragment per place, then confirm by re-encoding.
    Parse,
}

impl DecodeStrategy {
    pub const NAMES: [&'static str; 2] = ["search", "parse"];

    pub fn as_str(&self) -> &'static str {
        match self {
            DecodeStrategy::Search => "search",
            DecodeStrategy::Parse => "parse",
        }
    }
}

impl fmt::Display for DecodeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecodeStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "search" => Ok(DecodeStrategy::Search),
            "parse" => Ok(DecodeStrategy::Parse),
            other => Err(format!(
                "unknown decode strategy '{}', expected one of: {}",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

/// A finished conversion, as reported by `roman-convert --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub direction: Direction,
    pub input: String,
    pub output: String,
}

impl Conversion {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
