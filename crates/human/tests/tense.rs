//! Tense selection against "now", pinned with a frozen clock.

use std::sync::Mutex;

use kairos_human::DiffFormatter;
use kairos_instant::{Instant, TestClock};

static CLOCK_GUARD: Mutex<()> = Mutex::new(());

#[test]
fn past_against_now_reads_ago() {
    let _guard = CLOCK_GUARD.lock().unwrap_or_else(|e| e.into_inner());
    TestClock::set_from_str("2024-03-10 12:00:00").unwrap();

    let past = Instant::parse("2024-03-07 12:00:00", None).unwrap();
    assert_eq!(
        DiffFormatter::default().diff_for_humans(&past, None, false),
        "3 days ago"
    );

    TestClock::clear();
}

#[test]
fn future_against_now_reads_from_now() {
    let _guard = CLOCK_GUARD.lock().unwrap_or_else(|e| e.into_inner());
    TestClock::set_from_str("2024-03-10 12:00:00").unwrap();

    let future = Instant::parse("2024-03-10 14:00:00", None).unwrap();
    assert_eq!(
        DiffFormatter::default().diff_for_humans(&future, None, false),
        "2 hours from now"
    );

    let date = Instant::parse("2024-03-31 12:00:00", None).unwrap().date();
    assert_eq!(
        DiffFormatter::default().date_diff_for_humans(&date, None, false),
        "3 weeks from now"
    );

    TestClock::clear();
}
