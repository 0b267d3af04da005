//! Calendar date with clamping and overflow arithmetic policies.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate, TimeDelta, Weekday};

use crate::diff::Diff;
use crate::error::CalendarError;
use crate::interval::Interval;
use crate::week;

/// Number of days in each month of a common year (index 0 unused,
/// index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// An immutable calendar date (year, month, day) with no time-of-day.
///
/// A calendar date is independent of timezones: it represents the same
/// day everywhere. All mutators return new values.
///
/// Month and year arithmetic comes in two policies:
///
/// - **clamping** ([`CalendarDate::add_months`]): a day that does not
///   exist in the target month is pulled back to the last valid day of
///   that month (`2012-01-31` plus one month is `2012-02-29`).
/// - **overflow** ([`CalendarDate::add_months_with_overflow`]): excess
///   days roll into the following month (`2012-01-31` plus one month is
///   `2012-03-02`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a new `CalendarDate` from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the triple does not name
    /// a real day (e.g. February 30).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    /// Wraps an already-validated platform date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the underlying platform date.
    pub fn naive(self) -> NaiveDate {
        self.0
    }

    /// Parses the canonical `YYYY-MM-DD` form.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidFormat`] when the string does not
    /// parse as a real date in that form.
    pub fn parse(input: &str) -> Result<Self, CalendarError> {
        NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| CalendarError::InvalidFormat {
                input: input.to_string(),
            })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week.
    pub fn day_of_week(self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the day of the year (1..=366).
    pub fn day_of_year(self) -> u32 {
        self.0.ordinal()
    }

    /// Returns the ISO-8601 week number (1..=53), weeks starting Monday.
    pub fn iso_week_of_year(self) -> u32 {
        self.0.iso_week().week()
    }

    /// Returns the ISO-8601 week-numbering year, which differs from the
    /// calendar year around year boundaries.
    pub fn iso_year(self) -> i32 {
        self.0.iso_week().year()
    }

    /// Returns the week within the month (1..=5), counted in blocks of
    /// seven days from the 1st.
    pub fn week_of_month(self) -> u32 {
        (self.day() + 6) / 7
    }

    /// Returns the quarter (1..=4).
    pub fn quarter(self) -> u32 {
        (self.month() - 1) / 3 + 1
    }

    /// Returns the calendar half (1 or 2).
    pub fn half(self) -> u32 {
        if self.month() <= 6 {
            1
        } else {
            2
        }
    }

    /// Returns the number of days in this date's month.
    pub fn days_in_month(self) -> u32 {
        if self.month() == 2 && self.is_leap_year() {
            29
        } else {
            DAYS_PER_MONTH[self.month() as usize]
        }
    }

    /// Returns whether this date's year is a leap year.
    pub fn is_leap_year(self) -> bool {
        self.0.leap_year()
    }

    /// Returns whether this date falls Monday through Friday.
    pub fn is_weekday(self) -> bool {
        !self.is_weekend()
    }

    /// Returns whether this date falls on a Saturday or Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self.day_of_week(), Weekday::Sat | Weekday::Sun)
    }

    /// Returns a copy with the year replaced. A February 29 moving to a
    /// common year is clamped to February 28.
    pub fn set_year(self, year: i32) -> Result<Self, CalendarError> {
        let day = self.day().min(days_in(year, self.month()));
        Self::new(year, self.month(), day)
    }

    /// Returns a copy with the month replaced, clamping the day to the
    /// target month's length.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if `month` is not 1..=12.
    pub fn set_month(self, month: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidDate {
                year: self.year(),
                month,
                day: self.day(),
            });
        }
        let day = self.day().min(days_in(self.year(), month));
        Self::new(self.year(), month, day)
    }

    /// Returns a copy with the day replaced.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the day does not exist
    /// in this month.
    pub fn set_day(self, day: u32) -> Result<Self, CalendarError> {
        Self::new(self.year(), self.month(), day)
    }

    /// Adds years with the clamping policy. Negative values travel into
    /// the past. `2012-02-29` plus one year is `2013-02-28`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] when the result leaves the
    /// platform's representable years.
    pub fn add_years(self, value: i32) -> Result<Self, CalendarError> {
        self.add_months(value.checked_mul(12).ok_or(CalendarError::OutOfRange)?)
    }

    /// Subtracts years with the clamping policy.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CalendarDate::add_years`].
    pub fn sub_years(self, value: i32) -> Result<Self, CalendarError> {
        self.add_years(value.checked_neg().ok_or(CalendarError::OutOfRange)?)
    }

    /// Adds years with the overflow policy. `2012-02-29` plus one year
    /// is `2013-03-01`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] when the result leaves the
    /// platform's representable years.
    pub fn add_years_with_overflow(self, value: i32) -> Result<Self, CalendarError> {
        self.add_months_with_overflow(value.checked_mul(12).ok_or(CalendarError::OutOfRange)?)
    }

    /// Subtracts years with the overflow policy.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CalendarDate::add_years_with_overflow`].
    pub fn sub_years_with_overflow(self, value: i32) -> Result<Self, CalendarError> {
        self.add_years_with_overflow(value.checked_neg().ok_or(CalendarError::OutOfRange)?)
    }

    /// Adds months with the clamping policy: if the target month is too
    /// short for the current day, the result is the last day of the
    /// target month. `2012-01-31` plus one month is `2012-02-29`.
    ///
    /// The platform's month arithmetic clamps natively, so this is a
    /// direct delegation.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] when the result leaves the
    /// platform's representable years.
    pub fn add_months(self, value: i32) -> Result<Self, CalendarError> {
        let shifted = if value >= 0 {
            self.0.checked_add_months(Months::new(value as u32))
        } else {
            self.0.checked_sub_months(Months::new(value.unsigned_abs()))
        };
        shifted.map(Self).ok_or(CalendarError::OutOfRange)
    }

    /// Subtracts months with the clamping policy.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CalendarDate::add_months`].
    pub fn sub_months(self, value: i32) -> Result<Self, CalendarError> {
        self.add_months(value.checked_neg().ok_or(CalendarError::OutOfRange)?)
    }

    /// Adds months with the overflow policy: days past the end of the
    /// target month roll into the following month. `2012-01-31` plus one
    /// month is `2012-03-02`.
    ///
    /// Implemented by measuring how far the clamped add drifted from the
    /// intended day and pushing the drift forward as days.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] when the result leaves the
    /// platform's representable years.
    pub fn add_months_with_overflow(self, value: i32) -> Result<Self, CalendarError> {
        let clamped = self.add_months(value)?;
        let drift = self.day().saturating_sub(clamped.day());
        if drift > 0 {
            clamped.add_days(drift as i64)
        } else {
            Ok(clamped)
        }
    }

    /// Subtracts months with the overflow policy.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CalendarDate::add_months_with_overflow`].
    pub fn sub_months_with_overflow(self, value: i32) -> Result<Self, CalendarError> {
        self.add_months_with_overflow(value.checked_neg().ok_or(CalendarError::OutOfRange)?)
    }

    /// Adds days. Negative values travel into the past.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] when the result leaves the
    /// platform's representable years.
    pub fn add_days(self, value: i64) -> Result<Self, CalendarError> {
        let delta = TimeDelta::try_days(value).ok_or(CalendarError::OutOfRange)?;
        self.0
            .checked_add_signed(delta)
            .map(Self)
            .ok_or(CalendarError::OutOfRange)
    }

    /// Subtracts days.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CalendarDate::add_days`].
    pub fn sub_days(self, value: i64) -> Result<Self, CalendarError> {
        self.add_days(value.checked_neg().ok_or(CalendarError::OutOfRange)?)
    }

    /// Adds whole weeks.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CalendarDate::add_days`].
    pub fn add_weeks(self, value: i64) -> Result<Self, CalendarError> {
        self.add_days(value.checked_mul(7).ok_or(CalendarError::OutOfRange)?)
    }

    /// Subtracts whole weeks.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CalendarDate::add_days`].
    pub fn sub_weeks(self, value: i64) -> Result<Self, CalendarError> {
        self.add_weeks(value.checked_neg().ok_or(CalendarError::OutOfRange)?)
    }

    /// Adds business days, skipping Saturdays and Sundays. Crossing a
    /// weekend consumes no weekday budget: a Friday plus one weekday is
    /// the following Monday.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CalendarDate::add_days`].
    pub fn add_weekdays(self, value: i64) -> Result<Self, CalendarError> {
        let step = if value >= 0 { 1 } else { -1 };
        let mut remaining = value.unsigned_abs();
        let mut current = self;
        while remaining > 0 {
            current = current.add_days(step)?;
            if current.is_weekday() {
                remaining -= 1;
            }
        }
        Ok(current)
    }

    /// Subtracts business days.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CalendarDate::add_days`].
    pub fn sub_weekdays(self, value: i64) -> Result<Self, CalendarError> {
        self.add_weekdays(value.checked_neg().ok_or(CalendarError::OutOfRange)?)
    }

    /// Moves to the next occurrence of the given weekday, strictly after
    /// this date: if today already is the target weekday, the result is
    /// seven days later. With no argument, moves a full week forward.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CalendarDate::add_days`].
    pub fn next(self, day_of_week: Option<Weekday>) -> Result<Self, CalendarError> {
        let target = day_of_week.unwrap_or_else(|| self.day_of_week());
        let ahead = (target.num_days_from_monday() + 7
            - self.day_of_week().num_days_from_monday())
            % 7;
        self.add_days(if ahead == 0 { 7 } else { ahead as i64 })
    }

    /// Moves to the previous occurrence of the given weekday, strictly
    /// before this date. With no argument, moves a full week back.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CalendarDate::add_days`].
    pub fn previous(self, day_of_week: Option<Weekday>) -> Result<Self, CalendarError> {
        let target = day_of_week.unwrap_or_else(|| self.day_of_week());
        let behind = (self.day_of_week().num_days_from_monday() + 7
            - target.num_days_from_monday())
            % 7;
        self.sub_days(if behind == 0 { 7 } else { behind as i64 })
    }

    /// Moves back to the configured first day of the week (see
    /// [`crate::week`]); already there, stays put.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CalendarDate::add_days`].
    pub fn start_of_week(self) -> Result<Self, CalendarError> {
        if self.day_of_week() == week::week_starts_at() {
            Ok(self)
        } else {
            self.previous(Some(week::week_starts_at()))
        }
    }

    /// Moves forward to the configured last day of the week; already
    /// there, stays put.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CalendarDate::add_days`].
    pub fn end_of_week(self) -> Result<Self, CalendarError> {
        if self.day_of_week() == week::week_ends_at() {
            Ok(self)
        } else {
            self.next(Some(week::week_ends_at()))
        }
    }

    /// Resets to the first day of the month.
    pub fn start_of_month(self) -> Self {
        Self(ymd(self.year(), self.month(), 1))
    }

    /// Resets to the last day of the month.
    pub fn end_of_month(self) -> Self {
        Self(ymd(self.year(), self.month(), self.days_in_month()))
    }

    /// Resets to the first day of the quarter.
    pub fn start_of_quarter(self) -> Self {
        Self(ymd(self.year(), (self.quarter() - 1) * 3 + 1, 1))
    }

    /// Resets to the last day of the quarter.
    pub fn end_of_quarter(self) -> Self {
        let month = self.quarter() * 3;
        Self(ymd(self.year(), month, days_in(self.year(), month)))
    }

    /// Resets to January 1 of the year.
    pub fn start_of_year(self) -> Self {
        Self(ymd(self.year(), 1, 1))
    }

    /// Resets to December 31 of the year.
    pub fn end_of_year(self) -> Self {
        Self(ymd(self.year(), 12, 31))
    }

    /// Resets to January 1 of the decade (years ..0 through ..9).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] at the edge of the platform
    /// year range.
    pub fn start_of_decade(self) -> Result<Self, CalendarError> {
        let year = self.year() - self.year().rem_euclid(10);
        Self::new(year, 1, 1).map_err(|_| CalendarError::OutOfRange)
    }

    /// Resets to December 31 of the decade.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] at the edge of the platform
    /// year range.
    pub fn end_of_decade(self) -> Result<Self, CalendarError> {
        let year = self.year() - self.year().rem_euclid(10) + 9;
        Self::new(year, 12, 31).map_err(|_| CalendarError::OutOfRange)
    }

    /// Resets to January 1 of the century (years ..01 through ..00).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] at the edge of the platform
    /// year range.
    pub fn start_of_century(self) -> Result<Self, CalendarError> {
        let year = self.year() - 1 - (self.year() - 1).rem_euclid(100) + 1;
        Self::new(year, 1, 1).map_err(|_| CalendarError::OutOfRange)
    }

    /// Resets to December 31 of the century.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] at the edge of the platform
    /// year range.
    pub fn end_of_century(self) -> Result<Self, CalendarError> {
        let year = self.year() - 1 - (self.year() - 1).rem_euclid(100) + 100;
        Self::new(year, 12, 31).map_err(|_| CalendarError::OutOfRange)
    }

    /// First occurrence of the given weekday in this month, or the first
    /// day of the month when no weekday is given.
    pub fn first_of_month(self, day_of_week: Option<Weekday>) -> Self {
        let first = self.start_of_month();
        match day_of_week {
            None => first,
            Some(target) => {
                let ahead = (target.num_days_from_monday() + 7
                    - first.day_of_week().num_days_from_monday())
                    % 7;
                Self(ymd(self.year(), self.month(), 1 + ahead))
            }
        }
    }

    /// Last occurrence of the given weekday in this month, or the last
    /// day of the month when no weekday is given.
    pub fn last_of_month(self, day_of_week: Option<Weekday>) -> Self {
        let last = self.end_of_month();
        match day_of_week {
            None => last,
            Some(target) => {
                let behind = (last.day_of_week().num_days_from_monday() + 7
                    - target.num_days_from_monday())
                    % 7;
                Self(ymd(self.year(), self.month(), last.day() - behind))
            }
        }
    }

    /// The nth occurrence of the given weekday counted from the first
    /// day of the month by strict forward hops, or `None` when the
    /// computed date falls outside this month.
    ///
    /// Counting starts *after* the first day: when the month opens on
    /// the target weekday, the first hop lands on day 8.
    pub fn nth_of_month(self, nth: u32, day_of_week: Weekday) -> Option<Self> {
        let candidate = self.start_of_month().hop(nth, day_of_week)?;
        (candidate.year() == self.year() && candidate.month() == self.month()).then_some(candidate)
    }

    /// First occurrence of the given weekday in this quarter, or the
    /// first day of the quarter when no weekday is given.
    pub fn first_of_quarter(self, day_of_week: Option<Weekday>) -> Self {
        self.start_of_quarter().first_of_month(day_of_week)
    }

    /// Last occurrence of the given weekday in this quarter, or the last
    /// day of the quarter when no weekday is given.
    pub fn last_of_quarter(self, day_of_week: Option<Weekday>) -> Self {
        self.end_of_quarter().last_of_month(day_of_week)
    }

    /// The nth occurrence of the given weekday counted from the first
    /// day of the quarter, or `None` when it falls outside the quarter.
    pub fn nth_of_quarter(self, nth: u32, day_of_week: Weekday) -> Option<Self> {
        let candidate = self.start_of_quarter().hop(nth, day_of_week)?;
        (candidate.year() == self.year() && candidate.month() <= self.quarter() * 3)
            .then_some(candidate)
    }

    /// First occurrence of the given weekday in this year, or January 1
    /// when no weekday is given.
    pub fn first_of_year(self, day_of_week: Option<Weekday>) -> Self {
        self.start_of_year().first_of_month(day_of_week)
    }

    /// Last occurrence of the given weekday in this year, or December 31
    /// when no weekday is given.
    pub fn last_of_year(self, day_of_week: Option<Weekday>) -> Self {
        self.end_of_year().last_of_month(day_of_week)
    }

    /// The nth occurrence of the given weekday counted from January 1,
    /// or `None` when it falls outside the year.
    pub fn nth_of_year(self, nth: u32, day_of_week: Weekday) -> Option<Self> {
        let candidate = self.start_of_year().hop(nth, day_of_week)?;
        (candidate.year() == self.year()).then_some(candidate)
    }

    fn hop(self, nth: u32, day_of_week: Weekday) -> Option<Self> {
        if nth == 0 {
            return None;
        }
        let mut current = self;
        for _ in 0..nth {
            current = current.next(Some(day_of_week)).ok()?;
        }
        Some(current)
    }

    /// Returns whether this date lies between two bounds, normalizing
    /// their order first. Inclusive bounds by default.
    pub fn between(self, first: CalendarDate, second: CalendarDate, inclusive: bool) -> bool {
        let (lo, hi) = if first > second {
            (second, first)
        } else {
            (first, second)
        };
        if inclusive {
            lo <= self && self <= hi
        } else {
            lo < self && self < hi
        }
    }

    /// Of two candidates, the one nearest to this date measured in days.
    /// Equidistant candidates resolve to the first argument.
    pub fn closest(self, first: CalendarDate, second: CalendarDate) -> CalendarDate {
        if self.diff_in_days(&second, true) < self.diff_in_days(&first, true) {
            second
        } else {
            first
        }
    }

    /// Of two candidates, the one furthest from this date measured in
    /// days. Equidistant candidates resolve to the first argument.
    pub fn farthest(self, first: CalendarDate, second: CalendarDate) -> CalendarDate {
        if self.diff_in_days(&second, true) > self.diff_in_days(&first, true) {
            second
        } else {
            first
        }
    }

    /// Component-wise difference to another date. Time components of the
    /// result are zero.
    pub fn diff(&self, other: &CalendarDate) -> Diff {
        let inverted = other < self;
        let (earlier, later) = if inverted {
            (*other, *self)
        } else {
            (*self, *other)
        };

        let mut years = i64::from(later.year()) - i64::from(earlier.year());
        let mut months = i64::from(later.month()) - i64::from(earlier.month());
        let mut days = i64::from(later.day()) - i64::from(earlier.day());

        if days < 0 {
            // Borrow the length of the earlier date's month, so the day
            // remainder stays non-negative in one step.
            days += i64::from(earlier.days_in_month());
            months -= 1;
        }
        if months < 0 {
            months += 12;
            years -= 1;
        }

        Diff {
            years,
            months,
            days,
            total_days: (later.0 - earlier.0).num_days(),
            inverted,
            ..Diff::default()
        }
    }

    /// Difference in whole years. With `absolute` false the result is
    /// negative when `other` precedes this date.
    pub fn diff_in_years(&self, other: &CalendarDate, absolute: bool) -> i64 {
        let diff = self.diff(other);
        if absolute {
            diff.years
        } else {
            diff.signed(diff.years)
        }
    }

    /// Difference in whole months.
    pub fn diff_in_months(&self, other: &CalendarDate, absolute: bool) -> i64 {
        let diff = self.diff(other);
        if absolute {
            diff.total_months()
        } else {
            diff.signed(diff.total_months())
        }
    }

    /// Difference in whole weeks, truncated toward zero.
    pub fn diff_in_weeks(&self, other: &CalendarDate, absolute: bool) -> i64 {
        self.diff_in_days(other, absolute) / 7
    }

    /// Difference in days.
    pub fn diff_in_days(&self, other: &CalendarDate, absolute: bool) -> i64 {
        let days = (other.0 - self.0).num_days();
        if absolute {
            days.abs()
        } else {
            days
        }
    }

    /// Difference in weekdays (Monday through Friday) between the two
    /// dates, endpoints included.
    pub fn diff_in_weekdays(&self, other: &CalendarDate, absolute: bool) -> i64 {
        // Walk errors cannot occur: the day step is non-empty and the
        // walk stays between the two endpoints.
        self.diff_filtered(
            &Interval {
                days: 1,
                ..Interval::default()
            },
            |d| d.is_weekday(),
            other,
            absolute,
        )
        .expect("single-day step over a bounded range cannot fail")
    }

    /// Difference in weekend days between the two dates, endpoints
    /// included.
    pub fn diff_in_weekend_days(&self, other: &CalendarDate, absolute: bool) -> i64 {
        self.diff_filtered(
            &Interval {
                days: 1,
                ..Interval::default()
            },
            |d| d.is_weekend(),
            other,
            absolute,
        )
        .expect("single-day step over a bounded range cannot fail")
    }

    /// Walks from the earlier to the later of (self, other) in `step`
    /// increments, both endpoints included, counting the dates for which
    /// `predicate` holds. With `absolute` false the count is negated
    /// when `other` precedes this date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::TimeComponentsOnDate`] when the step
    /// carries time components and [`CalendarError::EmptyInterval`] when
    /// it is zero.
    pub fn diff_filtered<F>(
        &self,
        step: &Interval,
        predicate: F,
        other: &CalendarDate,
        absolute: bool,
    ) -> Result<i64, CalendarError>
    where
        F: Fn(&CalendarDate) -> bool,
    {
        if step.has_time() {
            return Err(CalendarError::TimeComponentsOnDate);
        }
        if step.is_zero() {
            return Err(CalendarError::EmptyInterval);
        }

        let inverted = other < self;
        let (earlier, later) = if inverted {
            (*other, *self)
        } else {
            (*self, *other)
        };

        let mut count = 0;
        let mut current = earlier;
        while current <= later {
            if predicate(&current) {
                count += 1;
            }
            current = current.add_interval(step)?;
        }

        Ok(if inverted && !absolute { -count } else { count })
    }

    /// Applies an interval forward. Years and months use the overflow
    /// policy, matching native period addition.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::TimeComponentsOnDate`] when the interval
    /// carries time components, [`CalendarError::OutOfRange`] on
    /// arithmetic overflow.
    pub fn add_interval(self, interval: &Interval) -> Result<Self, CalendarError> {
        if interval.has_time() {
            return Err(CalendarError::TimeComponentsOnDate);
        }
        let months = months_component(interval)?;
        let days = i64::try_from(interval.total_days()).map_err(|_| CalendarError::OutOfRange)?;
        self.add_months_with_overflow(months)?.add_days(days)
    }

    /// Applies an interval backward.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`CalendarDate::add_interval`].
    pub fn sub_interval(self, interval: &Interval) -> Result<Self, CalendarError> {
        if interval.has_time() {
            return Err(CalendarError::TimeComponentsOnDate);
        }
        let months = months_component(interval)?;
        let days = i64::try_from(interval.total_days()).map_err(|_| CalendarError::OutOfRange)?;
        self.sub_months_with_overflow(months)?.sub_days(days)
    }
}

fn months_component(interval: &Interval) -> Result<i32, CalendarError> {
    interval
        .years
        .checked_mul(12)
        .and_then(|m| m.checked_add(interval.months))
        .and_then(|m| i32::try_from(m).ok())
        .ok_or(CalendarError::OutOfRange)
}

/// Days in the given month of the given year.
fn days_in(year: i32, month: u32) -> u32 {
    let leap = NaiveDate::from_ymd_opt(year, 1, 1).is_some_and(|d| d.leap_year());
    if month == 2 && leap {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

/// Constructs a date known to be valid from surrounding invariants.
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("period boundaries stay within the platform year range")
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
