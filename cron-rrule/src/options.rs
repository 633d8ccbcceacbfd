use std::fmt;
use std::str::FromStr;

use crate::rule::Frequency;

/// How much checking the field parser does before translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Validation {
    /// Every field must be a wildcard, a step, or in-range literals.
    #[default]
    Strict,
    /// Literal fields pass through untouched; unknown weekday numerals become
    /// empty `BYDAY` segments.
    Lenient,
}

/// Order in which `BY*` clauses are written after `FREQ`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClauseOrder {
    /// `FREQ, BYMONTHDAY, BYMINUTE, BYHOUR, BYDAY, BYMONTH`
    #[default]
    Reference,
    /// `FREQ, BYMINUTE, BYHOUR, BYDAY, BYMONTH, BYMONTHDAY`
    Canonical,
}

/// Translation settings. The default reproduces the established output
/// format with strict field checking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    pub validation: Validation,
    pub order: ClauseOrder,
    /// Frequency used when no field implies one. `None` renders `FREQ=`.
    pub default_frequency: Option<Frequency>,
}

impl Options {
    pub fn lenient() -> Self {
        Self {
            validation: Validation::Lenient,
            ..Self::default()
        }
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    pub fn with_order(mut self, order: ClauseOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_default_frequency(mut self, freq: Option<Frequency>) -> Self {
        self.default_frequency = freq;
        self
    }
}

impl Validation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Validation::Strict => "strict",
            Validation::Lenient => "lenient",
        }
    }
}

impl ClauseOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClauseOrder::Reference => "reference",
            ClauseOrder::Canonical => "canonical",
        }
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ClauseOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Validation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(Validation::Strict),
            "lenient" => Ok(Validation::Lenient),
            _ => Err(format!("unknown validation mode: {s} (expected strict or lenient)")),
        }
    }
}

impl FromStr for ClauseOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reference" => Ok(ClauseOrder::Reference),
            "canonical" => Ok(ClauseOrder::Canonical),
            _ => Err(format!(
                "unknown clause order: {s} (expected reference or canonical)"
            )),
        }
    }
}
