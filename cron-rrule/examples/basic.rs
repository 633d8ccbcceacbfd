//! Basic cron-rrule API walkthrough: translate, inspect, explain.

use cron_rrule::{CronExpression, Options};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // One-shot translation to a string
    println!("{}", cron_rrule::to_rrule("0 12 * * 1,3,5")?);

    // Parse first, then inspect the fields
    let expr: CronExpression = "0 15 10 * * ?".parse()?;
    for field in expr.fields() {
        println!("  {:<13} {}", field.name, field.kind);
    }

    // Build the rule and look at individual parts
    let rule = expr.to_rule(&Options::default());
    println!("FREQ = {:?}", rule.freq);
    println!("BYMONTHDAY = {:?}", rule.by_month_day);
    println!("{rule}");

    // Field-by-field explanation
    println!("\n{}", cron_rrule::explain("*/15 * * * *", &Options::default())?);

    // Errors point at the offending field
    if let Err(e) = cron_rrule::translate("0 24 * * *") {
        println!("\n{}", e.display_rich());
    }

    Ok(())
}
