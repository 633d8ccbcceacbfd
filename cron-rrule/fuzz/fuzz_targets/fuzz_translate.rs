#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Translate should never panic, only return Ok or Err
        if let Err(e) = cron_rrule::translate(s) {
            let _ = e.display_rich();
        }
    }
});
