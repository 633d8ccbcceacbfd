//! API surface test — the entry points callers rely on exist and return the
//! documented types.

use cron_rrule::{
    ClauseOrder, CronExpression, FieldKind, FieldName, Frequency, Options, RecurrenceRule,
    RulePart, TranslateError, Validation,
};

#[test]
fn static_to_rrule() {
    let result: Result<String, TranslateError> = cron_rrule::to_rrule("0 12 * * 1,3,5");
    assert_eq!(result.unwrap(), "RRULE:FREQ=WEEKLY;BYMINUTE=0;BYHOUR=12;BYDAY=MO,WE,FR");
}

#[test]
fn static_translate() {
    let rule: RecurrenceRule = cron_rrule::translate("0 0 1 1 *").unwrap();
    assert_eq!(rule.freq, Some(Frequency::Yearly));
    assert_eq!(rule.by_month.as_deref(), Some("1"));
    assert_eq!(rule.by_month_day, None);
}

#[test]
fn static_validate() {
    assert!(cron_rrule::validate("*/15 * * * *", &Options::default()));
    assert!(!cron_rrule::validate("* * *", &Options::default()));
    assert!(!cron_rrule::validate("0 9 * * 7", &Options::default()));
    assert!(cron_rrule::validate("0 9 * * 7", &Options::lenient()));
}

#[test]
fn from_cron_matches_translate() {
    let a = RecurrenceRule::from_cron("0 15 10 * * ?").unwrap();
    let b = cron_rrule::translate("0 15 10 * * ?").unwrap();
    assert_eq!(a, b);
}

#[test]
fn expression_parse_and_rule() {
    let expr: CronExpression = "0 15 10 * * ?".parse().unwrap();
    assert_eq!(expr.day_of_week.name, FieldName::DayOfWeek);
    assert_eq!(expr.day_of_week.kind, FieldKind::NoSpecific);
    let rule = expr.to_rule(&Options::default());
    assert_eq!(rule.freq, Some(Frequency::Monthly));
}

#[test]
fn expression_parse_with_lenient() {
    let expr = CronExpression::parse_with("0 9 * * 1-5", Validation::Lenient).unwrap();
    assert_eq!(expr.day_of_week.kind, FieldKind::Unchecked);
    assert!(CronExpression::parse("0 9 * * 1-5").is_err());
}

#[test]
fn rule_components() {
    let rule = cron_rrule::translate("0 15 10 * * ?").unwrap();
    let parts: Vec<RulePart> = rule.components().into_iter().map(|(p, _)| p).collect();
    assert_eq!(
        parts,
        [
            RulePart::Freq,
            RulePart::ByMonthDay,
            RulePart::ByMinute,
            RulePart::ByHour
        ]
    );
    assert_eq!(rule.value(), "FREQ=MONTHLY;BYMONTHDAY=10;BYMINUTE=0;BYHOUR=15");
}

#[test]
fn explain_returns_text() {
    let text: String = cron_rrule::explain("0 12 * * 1,3,5", &Options::default()).unwrap();
    assert!(text.contains("WEEKLY"));
    assert!(text.contains("list 1, 3, 5"));
}

#[test]
fn options_order() {
    let opts = Options::default().with_order(ClauseOrder::Canonical);
    let rule = cron_rrule::translate_with("0 15 10 * * ?", &opts).unwrap();
    assert_eq!(rule.order, ClauseOrder::Canonical);
}

#[test]
fn error_is_std_error() {
    let err = cron_rrule::translate("* *").unwrap_err();
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert_eq!(boxed.to_string(), "Invalid CRON expression format");
}

#[cfg(feature = "serde")]
#[test]
fn handler_round_trip() {
    use cron_rrule::handler::{handle_request, Reply};

    let reply: Reply = handle_request(
        r#"{"cron_expression": "*/15 * * * *"}"#,
        &Options::default(),
    );
    assert_eq!(reply.status(), 200);
    let json: serde_json::Value = serde_json::from_str(&reply.to_json().unwrap()).unwrap();
    assert_eq!(json["rfc5545_rule"], "RRULE:FREQ=;BYMINUTE=0,15,30,45");
}
