//! Period boundary navigation and weekday occurrence lookup.

use kairos_calendar::{CalendarDate, Weekday};

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::new(y, m, d).unwrap()
}

#[test]
fn week_boundaries_follow_iso_defaults() {
    // 2024-04-03 is a Wednesday.
    let wed = date(2024, 4, 3);
    assert_eq!(wed.start_of_week().unwrap(), date(2024, 4, 1));
    assert_eq!(wed.end_of_week().unwrap(), date(2024, 4, 7));

    // Already on the boundary: no movement.
    let monday = date(2024, 4, 1);
    assert_eq!(monday.start_of_week().unwrap(), monday);
    let sunday = date(2024, 4, 7);
    assert_eq!(sunday.end_of_week().unwrap(), sunday);
}

#[test]
fn month_quarter_year_boundaries() {
    let d = date(2014, 8, 20);
    assert_eq!(d.start_of_month(), date(2014, 8, 1));
    assert_eq!(d.end_of_month(), date(2014, 8, 31));
    assert_eq!(d.start_of_quarter(), date(2014, 7, 1));
    assert_eq!(d.end_of_quarter(), date(2014, 9, 30));
    assert_eq!(d.start_of_year(), date(2014, 1, 1));
    assert_eq!(d.end_of_year(), date(2014, 12, 31));
}

#[test]
fn quarter_boundaries_by_quarter() {
    assert_eq!(date(2014, 2, 10).start_of_quarter(), date(2014, 1, 1));
    assert_eq!(date(2014, 2, 10).end_of_quarter(), date(2014, 3, 31));
    assert_eq!(date(2014, 11, 10).start_of_quarter(), date(2014, 10, 1));
    assert_eq!(date(2014, 11, 10).end_of_quarter(), date(2014, 12, 31));
}

#[test]
fn decade_and_century() {
    assert_eq!(date(2014, 8, 20).start_of_decade().unwrap(), date(2010, 1, 1));
    assert_eq!(date(2014, 8, 20).end_of_decade().unwrap(), date(2019, 12, 31));
    assert_eq!(
        date(2014, 8, 20).start_of_century().unwrap(),
        date(2001, 1, 1)
    );
    assert_eq!(
        date(2014, 8, 20).end_of_century().unwrap(),
        date(2100, 12, 31)
    );
    // A year ending in 00 belongs to the previous century.
    assert_eq!(
        date(2000, 8, 20).start_of_century().unwrap(),
        date(1901, 1, 1)
    );
    assert_eq!(
        date(2000, 8, 20).end_of_century().unwrap(),
        date(2000, 12, 31)
    );
}

#[test]
fn first_of_period() {
    // August 2014 opens on a Friday.
    let d = date(2014, 8, 20);
    assert_eq!(d.first_of_month(None), date(2014, 8, 1));
    assert_eq!(d.first_of_month(Some(Weekday::Fri)), date(2014, 8, 1));
    assert_eq!(d.first_of_month(Some(Weekday::Sun)), date(2014, 8, 3));
    assert_eq!(d.first_of_quarter(Some(Weekday::Mon)), date(2014, 7, 7));
    assert_eq!(d.first_of_year(Some(Weekday::Mon)), date(2014, 1, 6));
}

#[test]
fn last_of_period() {
    let d = date(2014, 8, 20);
    assert_eq!(d.last_of_month(None), date(2014, 8, 31));
    assert_eq!(d.last_of_month(Some(Weekday::Sun)), date(2014, 8, 31));
    assert_eq!(d.last_of_month(Some(Weekday::Fri)), date(2014, 8, 29));
    assert_eq!(d.last_of_quarter(Some(Weekday::Tue)), date(2014, 9, 30));
    assert_eq!(d.last_of_year(Some(Weekday::Wed)), date(2014, 12, 31));
}

#[test]
fn nth_of_month_counts_strictly_past_day_one() {
    // September 2014 opens on a Monday, so hop counting skips it: the
    // "first" Monday by hops is September 8.
    let d = date(2014, 9, 10);
    assert_eq!(d.nth_of_month(1, Weekday::Mon), Some(date(2014, 9, 8)));
    assert_eq!(d.nth_of_month(1, Weekday::Tue), Some(date(2014, 9, 2)));
}

#[test]
fn nth_of_period_out_of_range_is_none() {
    let d = date(2014, 8, 20);
    assert_eq!(d.nth_of_month(6, Weekday::Mon), None);
    assert_eq!(d.nth_of_quarter(14, Weekday::Mon), None);
    assert_eq!(d.nth_of_year(53, Weekday::Mon), None);
    assert_eq!(d.nth_of_month(0, Weekday::Mon), None);
}

#[test]
fn nth_of_quarter_and_year_in_range() {
    let d = date(2014, 8, 20);
    assert_eq!(d.nth_of_quarter(5, Weekday::Wed), Some(date(2014, 7, 30)));
    assert_eq!(d.nth_of_year(10, Weekday::Fri), Some(date(2014, 3, 7)));
}

#[test]
fn week_of_month_and_iso_week() {
    assert_eq!(date(2014, 8, 1).week_of_month(), 1);
    assert_eq!(date(2014, 8, 8).week_of_month(), 2);
    assert_eq!(date(2014, 8, 31).week_of_month(), 5);

    // 2014-12-29 is a Monday belonging to ISO week 1 of 2015.
    assert_eq!(date(2014, 12, 29).iso_week_of_year(), 1);
    assert_eq!(date(2014, 12, 29).iso_year(), 2015);
}
