use std::num::IntErrorKind;

use crate::error::TranslateError;
use crate::field::{CronExpression, Field, FieldKind, FieldName};
use crate::lexer::{Lexer, Token};
use crate::options::Validation;

/// Split and classify a cron expression.
///
/// Five fields are `minute hour day-of-month month day-of-week`. With six,
/// the sixth is the day-of-week and the fifth is read past.
pub fn parse(input: &str, validation: Validation) -> Result<CronExpression, TranslateError> {
    let tokens = Lexer::new(input).tokenize();
    if tokens.len() != 5 && tokens.len() != 6 {
        return Err(TranslateError::field_count(tokens.len(), input));
    }

    let parser = Parser { input, validation };
    let (dow_token, ignored) = if tokens.len() == 6 {
        (&tokens[5], Some(tokens[4].text.clone()))
    } else {
        (&tokens[4], None)
    };

    let expr = CronExpression {
        minute: parser.field(FieldName::Minute, &tokens[0])?,
        hour: parser.field(FieldName::Hour, &tokens[1])?,
        day_of_month: parser.field(FieldName::DayOfMonth, &tokens[2])?,
        month: parser.field(FieldName::Month, &tokens[3])?,
        day_of_week: parser.field(FieldName::DayOfWeek, dow_token)?,
        ignored,
        source: input.to_string(),
    };

    if validation == Validation::Strict
        && expr.day_of_month.kind.is_no_specific()
        && expr.day_of_week.kind.is_no_specific()
    {
        return Err(parser.error(
            &expr.day_of_month,
            "'?' cannot be used for both day-of-month and day-of-week",
        ));
    }

    Ok(expr)
}

struct Parser<'a> {
    input: &'a str,
    validation: Validation,
}

impl Parser<'_> {
    fn field(&self, name: FieldName, token: &Token) -> Result<Field, TranslateError> {
        let kind = match self.validation {
            Validation::Strict => self.classify_strict(name, token)?,
            Validation::Lenient => self.classify_lenient(name, token)?,
        };
        tracing::trace!(field = %name, text = %token.text, kind = ?kind, "classified cron field");
        Ok(Field {
            name,
            kind,
            text: token.text.clone(),
            span: token.span,
        })
    }

    fn classify_lenient(&self, name: FieldName, token: &Token) -> Result<FieldKind, TranslateError> {
        let text = token.text.as_str();
        match text {
            "*" => Ok(FieldKind::Wildcard),
            "?" => Ok(FieldKind::NoSpecific),
            // Anything containing `*/` counts as a step; the number is the
            // segment after the first slash.
            _ if name.allows_step() && text.contains("*/") => {
                let step = text.split('/').nth(1).unwrap_or_default();
                self.parse_step(name, token, step).map(FieldKind::Step)
            }
            _ => Ok(FieldKind::Unchecked),
        }
    }

    fn classify_strict(&self, name: FieldName, token: &Token) -> Result<FieldKind, TranslateError> {
        let text = token.text.as_str();

        if text == "*" {
            return Ok(FieldKind::Wildcard);
        }

        if text == "?" {
            if !name.allows_no_specific() {
                return Err(self.token_error(
                    name,
                    token,
                    format!("'?' is only allowed in day-of-month or day-of-week, not {name}"),
                ));
            }
            return Ok(FieldKind::NoSpecific);
        }

        if let Some(step) = text.strip_prefix("*/") {
            if !name.allows_step() {
                return Err(self.token_error(
                    name,
                    token,
                    format!("step values are not supported in the {name} field"),
                ));
            }
            return self.parse_step(name, token, step).map(FieldKind::Step);
        }

        let mut values = Vec::new();
        for part in text.split(',') {
            values.push(self.parse_value(name, token, part)?);
        }
        if values.len() == 1 {
            Ok(FieldKind::Value(values[0]))
        } else {
            Ok(FieldKind::List(values))
        }
    }

    fn parse_step(&self, name: FieldName, token: &Token, step: &str) -> Result<u32, TranslateError> {
        let n: u32 = match step.parse() {
            Ok(n) => n,
            // Any step past the field's range expands to `0` alone.
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => u32::MAX,
            Err(_) => {
                return Err(self.token_error(
                    name,
                    token,
                    format!("invalid {name} step: {step:?}"),
                ))
            }
        };
        if n == 0 {
            return Err(self.token_error(name, token, "step cannot be 0"));
        }
        Ok(n)
    }

    fn parse_value(&self, name: FieldName, token: &Token, part: &str) -> Result<u8, TranslateError> {
        if part.is_empty() {
            return Err(self.token_error(name, token, format!("empty item in {name} list")));
        }
        if part.contains('-') {
            return Err(self.token_error(
                name,
                token,
                format!("ranges are not supported: {part}"),
            ));
        }
        if !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(self.token_error(name, token, format!("invalid {name} value: {part}")));
        }

        let (min, max) = name.bounds();
        if name == FieldName::DayOfWeek && part.len() > 1 {
            return Err(self.token_error(
                name,
                token,
                format!("{name} must be a single digit {min}-{max}, got {part}"),
            ));
        }
        let out_of_range = || {
            self.token_error(
                name,
                token,
                format!("{name} must be {min}-{max}, got {part}"),
            )
        };
        let value: u32 = part.parse().map_err(|_| out_of_range())?;
        if value < u32::from(min) || value > u32::from(max) {
            return Err(out_of_range());
        }
        u8::try_from(value).map_err(|_| out_of_range())
    }

    fn token_error(
        &self,
        name: FieldName,
        token: &Token,
        message: impl Into<String>,
    ) -> TranslateError {
        TranslateError::field(name, message, token.span, self.input)
    }

    fn error(&self, field: &Field, message: impl Into<String>) -> TranslateError {
        TranslateError::field(field.name, message, field.span, self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Span;

    fn strict(input: &str) -> Result<CronExpression, TranslateError> {
        parse(input, Validation::Strict)
    }

    fn lenient(input: &str) -> Result<CronExpression, TranslateError> {
        parse(input, Validation::Lenient)
    }

    #[test]
    fn test_five_fields() {
        let expr = strict("0 12 * * 1,3,5").unwrap();
        assert_eq!(expr.minute.kind, FieldKind::Value(0));
        assert_eq!(expr.hour.kind, FieldKind::Value(12));
        assert_eq!(expr.day_of_month.kind, FieldKind::Wildcard);
        assert_eq!(expr.month.kind, FieldKind::Wildcard);
        assert_eq!(expr.day_of_week.kind, FieldKind::List(vec![1, 3, 5]));
        assert_eq!(expr.ignored, None);
        assert_eq!(expr.field_count(), 5);
    }

    #[test]
    fn test_six_fields_uses_last_as_day_of_week() {
        let expr = strict("0 15 10 * 2 ?").unwrap();
        assert_eq!(expr.day_of_week.kind, FieldKind::NoSpecific);
        assert_eq!(expr.day_of_week.span, Span::new(12, 13));
        assert_eq!(expr.ignored.as_deref(), Some("2"));
        assert_eq!(expr.field_count(), 6);
    }

    #[test]
    fn test_ignored_field_is_not_validated() {
        assert!(strict("0 0 1 * banana ?").is_ok());
    }

    #[test]
    fn test_field_counts() {
        for input in ["", "*", "* *", "* * *", "* * * *", "* * * * * * *", "1 2 3 4 5 6 7 8"] {
            let err = strict(input).unwrap_err();
            assert!(
                matches!(err, TranslateError::FieldCount { .. }),
                "expected field count error for {input:?}"
            );
            assert_eq!(err.to_string(), "Invalid CRON expression format");
        }
    }

    #[test]
    fn test_step() {
        let expr = strict("*/15 * * * *").unwrap();
        assert_eq!(expr.minute.kind, FieldKind::Step(15));
    }

    #[test]
    fn test_step_errors_in_both_modes() {
        for input in ["*/x * * * *", "*/0 * * * *", "*/-5 * * * *", "*/ * * * *"] {
            assert!(strict(input).is_err(), "strict accepted {input:?}");
            assert!(lenient(input).is_err(), "lenient accepted {input:?}");
        }
    }

    #[test]
    fn test_oversized_step_saturates() {
        for expr in [strict("*/99999999999 * * * *"), lenient("*/99999999999 * * * *")] {
            assert_eq!(expr.unwrap().minute.kind, FieldKind::Step(u32::MAX));
        }
    }

    #[test]
    fn test_strict_rejects_zero_padded_weekday() {
        let err = strict("0 9 * * 01").unwrap_err();
        assert_eq!(err.to_string(), "day-of-week must be a single digit 0-6, got 01");
        assert_eq!(err.field_name(), Some(FieldName::DayOfWeek));
        assert!(strict("0 9 * * 1,05").is_err());
        assert!(lenient("0 9 * * 01").is_ok());
    }

    #[test]
    fn test_strict_rejects_out_of_range() {
        let err = strict("60 * * * *").unwrap_err();
        assert_eq!(err.to_string(), "minute must be 0-59, got 60");
        assert_eq!(err.field_name(), Some(FieldName::Minute));

        assert!(strict("0 24 * * *").is_err());
        assert!(strict("0 0 0 * *").is_err());
        assert!(strict("0 0 32 * *").is_err());
        assert!(strict("0 0 * 13 *").is_err());
        assert!(strict("0 0 * * 7").is_err());
        assert!(strict("0 0 * * 99999999999").is_err());
    }

    #[test]
    fn test_strict_rejects_unsupported_syntax() {
        assert!(strict("0 9 * * 1-5").is_err());
        assert!(strict("0 9 * * MON").is_err());
        assert!(strict("0 9 L * *").is_err());
        assert!(strict("0 9 * * 1#2").is_err());
        assert!(strict("0 */2 * * *").is_err());
        assert!(strict("0 9 * * 1,,3").is_err());
        assert!(strict("? 9 * * *").is_err());
    }

    #[test]
    fn test_strict_rejects_double_no_specific() {
        let err = strict("0 9 ? * ?").unwrap_err();
        assert_eq!(err.field_name(), Some(FieldName::DayOfMonth));
    }

    #[test]
    fn test_strict_error_span() {
        let err = strict("0 25 * * *").unwrap_err();
        match err {
            TranslateError::Field { span, .. } => assert_eq!(span, Span::new(2, 4)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_lenient_passes_through() {
        let expr = lenient("0 */2 L JAN 1-5").unwrap();
        assert_eq!(expr.hour.kind, FieldKind::Unchecked);
        assert_eq!(expr.hour.text, "*/2");
        assert_eq!(expr.day_of_month.kind, FieldKind::Unchecked);
        assert_eq!(expr.day_of_week.kind, FieldKind::Unchecked);
    }

    #[test]
    fn test_lenient_loose_step() {
        let expr = lenient("5*/10/3 * * * *").unwrap();
        assert_eq!(expr.minute.kind, FieldKind::Step(10));
    }
}
