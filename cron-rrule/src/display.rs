use std::fmt;

use crate::field::{CronExpression, FieldKind};
use crate::rule::{Frequency, RecurrenceRule, RulePart};

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RRULE:")?;
        for (i, (part, value)) in self.components().iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            write!(f, "{}={}", part.key(), value)?;
        }
        Ok(())
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RulePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Human description of a field shape, used by `explain`.
impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Wildcard => write!(f, "any"),
            FieldKind::NoSpecific => write!(f, "no specific value"),
            FieldKind::Step(n) => write!(f, "every {n}"),
            FieldKind::Value(v) => write!(f, "value {v}"),
            FieldKind::List(vs) => {
                write!(f, "list ")?;
                for (i, v) in vs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                Ok(())
            }
            FieldKind::Unchecked => write!(f, "verbatim"),
        }
    }
}

/// Normalized form: single spaces between fields, placeholder kept.
impl fmt::Display for CronExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.minute.text, self.hour.text, self.day_of_month.text, self.month.text
        )?;
        if let Some(ignored) = &self.ignored {
            write!(f, " {ignored}")?;
        }
        write!(f, " {}", self.day_of_week.text)
    }
}
