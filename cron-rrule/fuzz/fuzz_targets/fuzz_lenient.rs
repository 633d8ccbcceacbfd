#![no_main]
use libfuzzer_sys::fuzz_target;

use cron_rrule::Options;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Lenient mode is a superset of strict mode
        if cron_rrule::translate_with(s, &Options::default()).is_ok() {
            assert!(cron_rrule::translate_with(s, &Options::lenient()).is_ok());
        }
    }
});
