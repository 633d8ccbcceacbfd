//! Translation options: validation mode, clause order, default frequency.

use cron_rrule::{ClauseOrder, Frequency, Options};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let expr = "0 15 10 * * ?";

    // Default: strict validation, BYMONTHDAY right after FREQ
    let rule = cron_rrule::translate_with(expr, &Options::default())?;
    println!("reference: {rule}");

    // Canonical order puts BYMONTHDAY last
    let canonical = Options::default().with_order(ClauseOrder::Canonical);
    println!("canonical: {}", cron_rrule::translate_with(expr, &canonical)?);

    // Nothing implies a frequency here, so FREQ is empty unless a default is set
    let daily = Options::default().with_default_frequency(Some(Frequency::Daily));
    println!("no default:   {}", cron_rrule::to_rrule("0 9 * * *")?);
    println!("daily default: {}", cron_rrule::translate_with("0 9 * * *", &daily)?);

    // Lenient mode accepts what strict mode rejects
    match cron_rrule::translate("0 9 * * 1,7") {
        Ok(rule) => println!("strict: {rule}"),
        Err(e) => println!("strict: {e}"),
    }
    println!("lenient: {}", cron_rrule::translate_with("0 9 * * 1,7", &Options::lenient())?);

    Ok(())
}
