use jiff::civil::Weekday;

use crate::error::TranslateError;
use crate::field::{CronExpression, Field, FieldKind};
use crate::options::Options;
use crate::parser;
use crate::rule::{Frequency, RecurrenceRule, RulePart};

/// Translate a cron expression into a recurrence rule.
pub fn translate(input: &str, options: &Options) -> Result<RecurrenceRule, TranslateError> {
    match parser::parse(input, options.validation) {
        Ok(expr) => {
            let rule = to_rule(&expr, options);
            tracing::debug!(input, rule = %rule, "translated cron expression");
            Ok(rule)
        }
        Err(err) => {
            tracing::debug!(input, error = %err, "rejected cron expression");
            Err(err)
        }
    }
}

/// Build the rule for an already parsed expression.
pub fn to_rule(expr: &CronExpression, options: &Options) -> RecurrenceRule {
    let clauses = Clauses::derive(expr);
    let freq = clauses.frequency(options.default_frequency);
    RecurrenceRule {
        freq,
        by_minute: clauses.by_minute,
        by_hour: clauses.by_hour,
        by_day: clauses.by_day,
        by_month: clauses.by_month,
        by_month_day: clauses.by_month_day,
        order: options.order,
    }
}

/// Everything each field contributes, before the frequency is settled.
#[derive(Debug, Default)]
struct Clauses {
    by_minute: Option<String>,
    by_hour: Option<String>,
    by_day: Option<String>,
    by_month: Option<String>,
    by_month_day: Option<String>,
    weekly: bool,
    yearly: bool,
    monthly: bool,
}

impl Clauses {
    fn derive(expr: &CronExpression) -> Self {
        let mut clauses = Clauses::default();

        if !expr.minute.kind.is_wildcard() {
            clauses.by_minute = Some(match expr.minute.kind {
                FieldKind::Step(n) => expand_step(n, 59),
                _ => expr.minute.text.clone(),
            });
        }

        // Hour steps are written as-is, not expanded.
        if !expr.hour.kind.is_wildcard() {
            clauses.by_hour = Some(expr.hour.text.clone());
        }

        let dow = &expr.day_of_week;
        if !dow.kind.is_wildcard() && !dow.kind.is_no_specific() {
            clauses.by_day = Some(by_day(dow));
            clauses.weekly = true;
        }

        if !expr.month.kind.is_wildcard() {
            clauses.by_month = Some(expr.month.text.clone());
            clauses.yearly = true;
        }

        if !expr.day_of_month.kind.is_wildcard() && dow.kind.is_no_specific() {
            clauses.by_month_day = Some(expr.day_of_month.text.clone());
            clauses.monthly = true;
        }

        clauses
    }

    /// Day-of-month (with `?` weekday) beats month, month beats weekday.
    fn frequency(&self, default: Option<Frequency>) -> Option<Frequency> {
        match (self.monthly, self.yearly, self.weekly) {
            (true, _, _) => Some(Frequency::Monthly),
            (false, true, _) => Some(Frequency::Yearly),
            (false, false, true) => Some(Frequency::Weekly),
            (false, false, false) => default,
        }
    }
}

/// `0, n, 2n, ...` up to and including `max`.
fn expand_step(n: u32, max: u32) -> String {
    (0..=max)
        .step_by(n as usize)
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn by_day(field: &Field) -> String {
    match field.kind.values() {
        Some(values) => values
            .iter()
            .map(|&n| weekday_code(n).unwrap_or(""))
            .collect::<Vec<_>>()
            .join(","),
        // Verbatim text: numerals outside 0-6 leave an empty segment.
        None => field
            .text
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| {
                if t.len() == 1 {
                    t.parse::<u8>().ok().and_then(weekday_code).unwrap_or("")
                } else {
                    ""
                }
            })
            .collect::<Vec<_>>()
            .join(","),
    }
}

/// Cron day-of-week numeral (0 = Sunday) to its iCalendar weekday code.
fn weekday_code(n: u8) -> Option<&'static str> {
    let offset = i8::try_from(n).ok()?;
    let weekday = Weekday::from_sunday_zero_offset(offset).ok()?;
    Some(match weekday {
        Weekday::Monday => "MO",
        Weekday::Tuesday => "TU",
        Weekday::Wednesday => "WE",
        Weekday::Thursday => "TH",
        Weekday::Friday => "FR",
        Weekday::Saturday => "SA",
        Weekday::Sunday => "SU",
    })
}

/// Explain how each field of a cron expression is read and which rule parts
/// it produces.
pub fn explain(input: &str, options: &Options) -> Result<String, TranslateError> {
    let expr = parser::parse(input, options.validation)?;
    let rule = to_rule(&expr, options);

    let mut lines = Vec::new();
    for field in expr.fields() {
        lines.push(format!(
            "{:<13} {:<10} {}",
            field.name.as_str(),
            field.text,
            field.kind
        ));
    }
    if let Some(ignored) = &expr.ignored {
        lines.push(format!("{:<13} {:<10} skipped", "(5th field)", ignored));
    }

    let reason = match Clauses::derive(&expr).frequency(None) {
        Some(Frequency::Monthly) => "day-of-month set and day-of-week is '?'",
        Some(Frequency::Yearly) => "month set",
        Some(Frequency::Weekly) => "day-of-week set",
        _ if rule.freq.is_some() => "configured default",
        _ => "no field implies a frequency",
    };
    lines.push(format!(
        "{:<13} {:<10} {}",
        RulePart::Freq.key(),
        rule.freq.map_or("(none)", |f| f.as_str()),
        reason
    ));
    lines.push(rule.to_string());

    Ok(lines.join("\n"))
}
