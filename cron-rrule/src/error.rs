use std::fmt;

use crate::field::FieldName;

/// Byte range within the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// All errors produced by cron-rrule.
///
/// Every variant describes malformed caller input. A transport layer should
/// map any of them to a client error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TranslateError {
    /// The expression did not split into 5 or 6 whitespace-separated fields.
    #[error("Invalid CRON expression format")]
    FieldCount { count: usize, input: String },

    /// A single field could not be interpreted.
    #[error("{message}")]
    Field {
        field: FieldName,
        message: String,
        span: Span,
        input: String,
    },
}

impl TranslateError {
    pub fn field_count(count: usize, input: impl Into<String>) -> Self {
        Self::FieldCount {
            count,
            input: input.into(),
        }
    }

    pub fn field(
        field: FieldName,
        message: impl Into<String>,
        span: Span,
        input: impl Into<String>,
    ) -> Self {
        Self::Field {
            field,
            message: message.into(),
            span,
            input: input.into(),
        }
    }

    /// The field that failed, if the error is tied to one.
    pub fn field_name(&self) -> Option<FieldName> {
        match self {
            Self::FieldCount { .. } => None,
            Self::Field { field, .. } => Some(*field),
        }
    }

    /// Format a rich error with the offending field underlined.
    pub fn display_rich(&self) -> String {
        match self {
            Self::FieldCount { count, input } => format!(
                "error: {self}\n  {input}\n  expected 5 or 6 fields, got {count}"
            ),
            Self::Field {
                field,
                message,
                span,
                input,
            } => format_span_error(&format!("{message} ({field})"), span, input),
        }
    }
}

fn format_span_error(message: &str, span: &Span, input: &str) -> String {
    let mut out = format!("error: {message}\n");
    out.push_str(&format!("  {input}\n"));
    // Spans are byte offsets; the underline is drawn in characters.
    let column = input
        .get(..span.start)
        .map_or(span.start, |s| s.chars().count());
    let width = input
        .get(span.start..span.end)
        .map_or(span.end.saturating_sub(span.start), |s| s.chars().count());
    out.push_str(&" ".repeat(column + 2));
    out.push_str(&"^".repeat(width.max(1)));
    out
}
