//! cron-rrule: translate cron expressions into RFC 5545 recurrence rules.
//!
//! Accepts 5-field (`minute hour day-of-month month day-of-week`) and
//! 6-field expressions, where the sixth field is the day-of-week and the
//! fifth is skipped.
//!
//! # Examples
//!
//! ```
//! let rule = cron_rrule::to_rrule("0 12 * * 1,3,5").unwrap();
//! assert_eq!(rule, "RRULE:FREQ=WEEKLY;BYMINUTE=0;BYHOUR=12;BYDAY=MO,WE,FR");
//! ```
//!
//! Translation settings live in [`Options`]:
//!
//! ```
//! use cron_rrule::{ClauseOrder, Options};
//!
//! let opts = Options::default().with_order(ClauseOrder::Canonical);
//! let rule = cron_rrule::translate_with("0 15 10 * * ?", &opts).unwrap();
//! assert_eq!(rule.to_string(), "RRULE:FREQ=MONTHLY;BYMINUTE=0;BYHOUR=15;BYMONTHDAY=10");
//! ```

pub mod convert;
pub mod display;
pub mod error;
pub mod field;
#[cfg(feature = "serde")]
pub mod handler;
pub mod lexer;
pub mod options;
pub mod parser;
pub mod rule;

pub use error::{Span, TranslateError};
pub use field::{CronExpression, Field, FieldKind, FieldName};
pub use options::{ClauseOrder, Options, Validation};
pub use rule::{Frequency, RecurrenceRule, RulePart};

use std::str::FromStr;

/// Translate with default [`Options`] and render as a string.
pub fn to_rrule(input: &str) -> Result<String, TranslateError> {
    translate(input).map(|rule| rule.to_string())
}

/// Translate with default [`Options`].
pub fn translate(input: &str) -> Result<RecurrenceRule, TranslateError> {
    convert::translate(input, &Options::default())
}

/// Translate with the given options.
pub fn translate_with(input: &str, options: &Options) -> Result<RecurrenceRule, TranslateError> {
    convert::translate(input, options)
}

/// Describe how each field is read and which rule it produces.
pub fn explain(input: &str, options: &Options) -> Result<String, TranslateError> {
    convert::explain(input, options)
}

/// Check whether an expression translates under the given options.
pub fn validate(input: &str, options: &Options) -> bool {
    parser::parse(input, options.validation).is_ok()
}

impl CronExpression {
    /// Parse with strict field validation.
    pub fn parse(input: &str) -> Result<Self, TranslateError> {
        parser::parse(input, Validation::Strict)
    }

    pub fn parse_with(input: &str, validation: Validation) -> Result<Self, TranslateError> {
        parser::parse(input, validation)
    }

    /// Build the recurrence rule for this expression.
    pub fn to_rule(&self, options: &Options) -> RecurrenceRule {
        convert::to_rule(self, options)
    }
}

impl FromStr for CronExpression {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl RecurrenceRule {
    /// Translate a cron expression with default [`Options`].
    pub fn from_cron(input: &str) -> Result<Self, TranslateError> {
        translate(input)
    }
}
