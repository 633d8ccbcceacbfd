use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

use crate::options::ClauseOrder;

/// RRULE `FREQ` values this crate can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Yearly => "YEARLY",
        }
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DAILY" => Ok(Frequency::Daily),
            "WEEKLY" => Ok(Frequency::Weekly),
            "MONTHLY" => Ok(Frequency::Monthly),
            "YEARLY" => Ok(Frequency::Yearly),
            _ => Err(format!("unknown frequency: {s}")),
        }
    }
}

/// RRULE rule parts, by their iCalendar key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RulePart {
    Freq,
    ByMinute,
    ByHour,
    ByDay,
    ByMonth,
    ByMonthDay,
}

impl RulePart {
    pub fn key(&self) -> &'static str {
        match self {
            RulePart::Freq => "FREQ",
            RulePart::ByMinute => "BYMINUTE",
            RulePart::ByHour => "BYHOUR",
            RulePart::ByDay => "BYDAY",
            RulePart::ByMonth => "BYMONTH",
            RulePart::ByMonthDay => "BYMONTHDAY",
        }
    }
}

const REFERENCE_ORDER: [RulePart; 5] = [
    RulePart::ByMonthDay,
    RulePart::ByMinute,
    RulePart::ByHour,
    RulePart::ByDay,
    RulePart::ByMonth,
];

const CANONICAL_ORDER: [RulePart; 5] = [
    RulePart::ByMinute,
    RulePart::ByHour,
    RulePart::ByDay,
    RulePart::ByMonth,
    RulePart::ByMonthDay,
];

/// An RFC 5545 recurrence rule derived from a cron expression.
///
/// Values are kept in their rendered form: the `BY*` parts carry exactly the
/// comma-separated text that follows `=` in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub freq: Option<Frequency>,
    pub by_minute: Option<String>,
    pub by_hour: Option<String>,
    pub by_day: Option<String>,
    pub by_month: Option<String>,
    pub by_month_day: Option<String>,
    pub order: ClauseOrder,
}

impl RecurrenceRule {
    /// A rule with no frequency and no `BY*` parts.
    pub fn empty(order: ClauseOrder) -> Self {
        Self {
            freq: None,
            by_minute: None,
            by_hour: None,
            by_day: None,
            by_month: None,
            by_month_day: None,
            order,
        }
    }

    pub fn get(&self, part: RulePart) -> Option<&str> {
        match part {
            RulePart::Freq => Some(self.freq.map_or("", |f| f.as_str())),
            RulePart::ByMinute => self.by_minute.as_deref(),
            RulePart::ByHour => self.by_hour.as_deref(),
            RulePart::ByDay => self.by_day.as_deref(),
            RulePart::ByMonth => self.by_month.as_deref(),
            RulePart::ByMonthDay => self.by_month_day.as_deref(),
        }
    }

    /// Rule parts in output order. `FREQ` is always first, even when unset;
    /// `BY*` parts with an empty value are skipped.
    pub fn components(&self) -> Vec<(RulePart, &str)> {
        let order = match self.order {
            ClauseOrder::Reference => &REFERENCE_ORDER,
            ClauseOrder::Canonical => &CANONICAL_ORDER,
        };
        let mut parts = vec![(RulePart::Freq, self.get(RulePart::Freq).unwrap_or(""))];
        for part in order {
            match self.get(*part) {
                Some(value) if !value.is_empty() => parts.push((*part, value)),
                _ => {}
            }
        }
        parts
    }

    /// The rule without its `RRULE:` property prefix.
    pub fn value(&self) -> String {
        self.components()
            .iter()
            .map(|(part, value)| format!("{}={}", part.key(), value))
            .collect::<Vec<_>>()
            .join(";")
    }
}

#[cfg(feature = "serde")]
impl Serialize for RecurrenceRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(order: ClauseOrder) -> RecurrenceRule {
        RecurrenceRule {
            freq: Some(Frequency::Monthly),
            by_minute: Some("0".into()),
            by_hour: Some("15".into()),
            by_month_day: Some("10".into()),
            ..RecurrenceRule::empty(order)
        }
    }

    #[test]
    fn test_reference_order() {
        assert_eq!(
            sample(ClauseOrder::Reference).to_string(),
            "RRULE:FREQ=MONTHLY;BYMONTHDAY=10;BYMINUTE=0;BYHOUR=15"
        );
    }

    #[test]
    fn test_canonical_order() {
        assert_eq!(
            sample(ClauseOrder::Canonical).to_string(),
            "RRULE:FREQ=MONTHLY;BYMINUTE=0;BYHOUR=15;BYMONTHDAY=10"
        );
    }

    #[test]
    fn test_unset_frequency() {
        let rule = RecurrenceRule::empty(ClauseOrder::Reference);
        assert_eq!(rule.to_string(), "RRULE:FREQ=");
        assert_eq!(rule.value(), "FREQ=");
    }

    #[test]
    fn test_empty_values_skipped() {
        let rule = RecurrenceRule {
            freq: Some(Frequency::Weekly),
            by_day: Some(String::new()),
            ..RecurrenceRule::empty(ClauseOrder::Reference)
        };
        assert_eq!(rule.to_string(), "RRULE:FREQ=WEEKLY");
    }

    #[test]
    fn test_frequency_from_str() {
        assert_eq!("daily".parse::<Frequency>(), Ok(Frequency::Daily));
        assert_eq!("YEARLY".parse::<Frequency>(), Ok(Frequency::Yearly));
        assert!("hourly".parse::<Frequency>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_as_string() {
        let json = serde_json::to_string(&sample(ClauseOrder::Reference)).unwrap();
        assert_eq!(json, "\"RRULE:FREQ=MONTHLY;BYMONTHDAY=10;BYMINUTE=0;BYHOUR=15\"");
    }
}
