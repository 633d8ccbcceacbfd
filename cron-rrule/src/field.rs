use std::fmt;

use crate::error::Span;

/// Position of a field within a cron expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldName {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldName {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Minute => "minute",
            FieldName::Hour => "hour",
            FieldName::DayOfMonth => "day-of-month",
            FieldName::Month => "month",
            FieldName::DayOfWeek => "day-of-week",
        }
    }

    /// Inclusive range of literal values accepted in strict mode.
    pub fn bounds(&self) -> (u8, u8) {
        match self {
            FieldName::Minute => (0, 59),
            FieldName::Hour => (0, 23),
            FieldName::DayOfMonth => (1, 31),
            FieldName::Month => (1, 12),
            FieldName::DayOfWeek => (0, 6),
        }
    }

    /// Whether `?` is meaningful in this position.
    pub fn allows_no_specific(&self) -> bool {
        matches!(self, FieldName::DayOfMonth | FieldName::DayOfWeek)
    }

    /// Whether `*/N` is expanded in this position. Only minutes are.
    pub fn allows_step(&self) -> bool {
        matches!(self, FieldName::Minute)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The shape of a single cron field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// `*`
    Wildcard,
    /// `?`
    NoSpecific,
    /// `*/N`
    Step(u32),
    /// A single number, e.g. `15`.
    Value(u8),
    /// Comma-separated numbers, e.g. `1,3,5`.
    List(Vec<u8>),
    /// Anything else, kept verbatim. Only produced in lenient mode.
    Unchecked,
}

impl FieldKind {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, FieldKind::Wildcard)
    }

    pub fn is_no_specific(&self) -> bool {
        matches!(self, FieldKind::NoSpecific)
    }

    /// Numeric values carried by the field, if it is a literal.
    pub fn values(&self) -> Option<&[u8]> {
        match self {
            FieldKind::Value(v) => Some(std::slice::from_ref(v)),
            FieldKind::List(vs) => Some(vs),
            _ => None,
        }
    }
}

/// A classified field together with its original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: FieldName,
    pub kind: FieldKind,
    pub text: String,
    pub span: Span,
}

/// A cron expression split into its positional fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronExpression {
    pub minute: Field,
    pub hour: Field,
    pub day_of_month: Field,
    pub month: Field,
    pub day_of_week: Field,
    /// The 5th token of a 6-field expression, which is read past.
    pub ignored: Option<String>,
    pub source: String,
}

impl CronExpression {
    /// The five positional fields in cron order.
    pub fn fields(&self) -> [&Field; 5] {
        [
            &self.minute,
            &self.hour,
            &self.day_of_month,
            &self.month,
            &self.day_of_week,
        ]
    }

    pub fn field_count(&self) -> usize {
        if self.ignored.is_some() {
            6
        } else {
            5
        }
    }
}
