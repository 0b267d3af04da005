//! Process-wide week boundary configuration.
//!
//! Week-based navigation (`start_of_week`, `end_of_week`) is anchored on
//! two process-wide values, defaulting to the ISO convention of weeks
//! running Monday through Sunday. Libraries embedding kairos for locales
//! with different conventions can reconfigure them at startup.

use std::sync::atomic::{AtomicU8, Ordering};

use chrono::Weekday;

/// Weekdays indexed by days-from-Monday, for atomic storage.
const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

static WEEK_STARTS_AT: AtomicU8 = AtomicU8::new(0); // Monday
static WEEK_ENDS_AT: AtomicU8 = AtomicU8::new(6); // Sunday

/// Returns the configured first day of the week (default Monday).
pub fn week_starts_at() -> Weekday {
    WEEKDAYS[WEEK_STARTS_AT.load(Ordering::Relaxed) as usize]
}

/// Sets the process-wide first day of the week.
pub fn set_week_starts_at(day: Weekday) {
    WEEK_STARTS_AT.store(day.num_days_from_monday() as u8, Ordering::Relaxed);
}

/// Returns the configured last day of the week (default Sunday).
pub fn week_ends_at() -> Weekday {
    WEEKDAYS[WEEK_ENDS_AT.load(Ordering::Relaxed) as usize]
}

/// Sets the process-wide last day of the week.
pub fn set_week_ends_at(day: Weekday) {
    WEEK_ENDS_AT.store(day.num_days_from_monday() as u8, Ordering::Relaxed);
}

/// Serializes tests that read or write the week configuration; the
/// values are process-global and the test harness runs in parallel.
#[cfg(test)]
pub(crate) static CONFIG_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_iso() {
        let _guard = CONFIG_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        assert_eq!(week_starts_at(), Weekday::Mon);
        assert_eq!(week_ends_at(), Weekday::Sun);
    }

    #[test]
    fn roundtrip_configuration() {
        let _guard = CONFIG_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        set_week_starts_at(Weekday::Sun);
        set_week_ends_at(Weekday::Sat);
        assert_eq!(week_starts_at(), Weekday::Sun);
        assert_eq!(week_ends_at(), Weekday::Sat);

        // Restore the defaults for other tests in this process.
        set_week_starts_at(Weekday::Mon);
        set_week_ends_at(Weekday::Sun);
    }
}
