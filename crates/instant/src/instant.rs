//! Timezone-aware instants.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc,
};

use kairos_calendar::{CalendarDate, CalendarError, Diff, Weekday};
use kairos_clock::Time;

use crate::error::InstantError;
use crate::relative;
use crate::test_clock::TestClock;
use crate::zone::Zone;

const MICROS_PER_SECOND: i64 = 1_000_000;
const MICROS_PER_DAY: i64 = 86_400 * MICROS_PER_SECOND;

/// An absolute point in time, viewed through a timezone.
///
/// Internally an `Instant` is a local wall-clock date-time plus the UTC
/// offset in force at that moment; subtracting the offset from the local
/// time yields the absolute instant. Comparisons, equality and hashing
/// all go through the absolute microsecond timestamp, so two instants in
/// different zones compare equal when they name the same moment.
///
/// All mutators return new values. Calendar navigation (month and
/// weekday arithmetic, period boundaries) reuses
/// [`kairos_calendar::CalendarDate`] and preserves the time-of-day;
/// clock arithmetic (`add_hours` and friends) moves along the absolute
/// timeline and re-resolves the offset afterwards, so it crosses
/// daylight-saving transitions correctly.
#[derive(Debug, Clone, Copy)]
pub struct Instant {
    local: NaiveDateTime,
    offset: FixedOffset,
    zone: Zone,
}

impl Instant {
    /// Builds an instant from a local wall-clock reading in a zone.
    ///
    /// Ambiguous or skipped local times are resolved by
    /// [`Zone::resolve_local`].
    pub fn from_parts(local: NaiveDateTime, zone: Zone) -> Self {
        let offset = zone.resolve_local(local);
        Self {
            local,
            offset,
            zone,
        }
    }

    /// Builds an instant from a UTC wall-clock reading, viewed in `zone`.
    pub fn from_utc(utc: NaiveDateTime, zone: Zone) -> Self {
        let offset = zone.offset_at_utc(utc);
        let local = utc
            .checked_add_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))
            .expect("offset shift stays within the representable range");
        Self {
            local,
            offset,
            zone,
        }
    }

    /// The current moment, honoring a frozen [`TestClock`] when one is
    /// set. Defaults to UTC when no zone is given; a frozen clock keeps
    /// its own zone in that case.
    pub fn now(zone: Option<Zone>) -> Self {
        if let Some(frozen) = TestClock::get() {
            return match zone {
                Some(zone) => frozen.set_timezone(zone),
                None => frozen,
            };
        }
        let utc = Utc::now().naive_utc();
        // Keep microsecond resolution; nothing in the API can express
        // finer precision.
        let micros = utc.and_utc().timestamp_micros();
        let truncated = DateTime::from_timestamp_micros(micros)
            .expect("current time is representable")
            .naive_utc();
        Self::from_utc(truncated, zone.unwrap_or(Zone::UTC))
    }

    /// Midnight of the current day.
    pub fn today(zone: Option<Zone>) -> Self {
        Self::now(zone).start_of_day()
    }

    /// Midnight of the next day.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::Calendar`] at the edge of the platform
    /// year range.
    pub fn tomorrow(zone: Option<Zone>) -> Result<Self, InstantError> {
        Self::today(zone).add_days(1)
    }

    /// Midnight of the previous day.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Instant::tomorrow`].
    pub fn yesterday(zone: Option<Zone>) -> Result<Self, InstantError> {
        Self::today(zone).sub_days(1)
    }

    /// Builds an instant from explicit components.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::Calendar`] for an impossible date and
    /// [`InstantError::InvalidFormat`] for out-of-range time fields.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        microsecond: u32,
        zone: Option<Zone>,
    ) -> Result<Self, InstantError> {
        let date = CalendarDate::new(year, month, day)?;
        let time = NaiveTime::from_hms_micro_opt(hour, minute, second, microsecond).ok_or(
            InstantError::InvalidFormat {
                input: format!("{hour:02}:{minute:02}:{second:02}.{microsecond:06}"),
            },
        )?;
        Ok(Self::from_parts(
            date.naive().and_time(time),
            zone.unwrap_or(Zone::UTC),
        ))
    }

    /// Builds an instant from a Unix timestamp in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::OutOfRange`] for unrepresentable values.
    pub fn from_timestamp(seconds: i64, zone: Option<Zone>) -> Result<Self, InstantError> {
        let utc = DateTime::from_timestamp(seconds, 0).ok_or(InstantError::OutOfRange)?;
        Ok(Self::from_utc(utc.naive_utc(), zone.unwrap_or(Zone::UTC)))
    }

    /// Builds an instant from a Unix timestamp in microseconds.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::OutOfRange`] for unrepresentable values.
    pub fn from_timestamp_micros(micros: i64, zone: Option<Zone>) -> Result<Self, InstantError> {
        let utc = DateTime::from_timestamp_micros(micros).ok_or(InstantError::OutOfRange)?;
        Ok(Self::from_utc(utc.naive_utc(), zone.unwrap_or(Zone::UTC)))
    }

    /// Parses an instant from a string.
    ///
    /// Inputs are classified in order: a pure digit string is a Unix
    /// timestamp; `now` (or an empty string) is the current moment; a
    /// bare time-of-day is today at that time; a string with relative
    /// keywords (`+2 days`, `next tuesday`, ...) is a modifier applied
    /// to now; anything else must be a literal date or date-time,
    /// optionally carrying a UTC offset. A literal `YYYY-M-D` date in
    /// the input always routes to literal parsing, even when modifier
    /// keywords surround it.
    ///
    /// When a [`TestClock`] override is active, "now" and the relative
    /// forms resolve against the frozen instant; a bare time-of-day is
    /// placed on the frozen date with the frozen zone kept untouched.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::InvalidFormat`] for unclassifiable input
    /// and [`InstantError::InvalidModifier`] for an unknown relative
    /// clause.
    pub fn parse(input: &str, zone: Option<Zone>) -> Result<Self, InstantError> {
        let trimmed = input.trim();

        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            let seconds = trimmed
                .parse::<i64>()
                .map_err(|_| InstantError::InvalidFormat {
                    input: input.to_string(),
                })?;
            return Self::from_timestamp(seconds, zone);
        }

        let is_now = trimmed.is_empty() || trimmed.eq_ignore_ascii_case("now");

        if let Some(frozen) = TestClock::get() {
            tracing::debug!(input = trimmed, base = %frozen, "resolving against frozen clock");
            if is_now {
                return Ok(match zone {
                    Some(zone) => frozen.set_timezone(zone),
                    None => frozen,
                });
            }
            if relative::is_time_only(trimmed) {
                return Ok(frozen.with_time(Time::parse(trimmed)?));
            }
            if relative::has_relative_keywords(trimmed) {
                let base = match zone {
                    Some(zone) => frozen.set_timezone(zone),
                    None => frozen,
                };
                return relative::apply(base, trimmed);
            }
            return Self::parse_literal(trimmed, zone.unwrap_or(Zone::UTC));
        }

        if is_now {
            return Ok(Self::now(zone));
        }
        if relative::is_time_only(trimmed) {
            return Ok(Self::now(zone).with_time(Time::parse(trimmed)?));
        }
        if relative::has_relative_keywords(trimmed) {
            return relative::apply(Self::now(zone), trimmed);
        }
        Self::parse_literal(trimmed, zone.unwrap_or(Zone::UTC))
    }

    /// Parses an instant with an explicit strftime format.
    ///
    /// A format carrying an offset specifier (`%z` family) yields an
    /// instant in the parsed fixed offset, ignoring `zone`. A date-only
    /// format yields midnight.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::InvalidFormat`] when the input does not
    /// match the format.
    pub fn create_from_format(
        input: &str,
        format: &str,
        zone: Option<Zone>,
    ) -> Result<Self, InstantError> {
        let invalid = || InstantError::InvalidFormat {
            input: input.to_string(),
        };
        if format.contains("%z") || format.contains("%:z") || format.contains("%::z") {
            let parsed = DateTime::parse_from_str(input, format).map_err(|_| invalid())?;
            return Ok(Self {
                local: parsed.naive_local(),
                offset: *parsed.offset(),
                zone: Zone::Fixed(*parsed.offset()),
            });
        }
        let zone = zone.unwrap_or(Zone::UTC);
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(Self::from_parts(naive, zone));
        }
        let date = NaiveDate::parse_from_str(input, format).map_err(|_| invalid())?;
        Ok(Self::from_parts(date.and_time(NaiveTime::MIN), zone))
    }

    fn parse_literal(input: &str, zone: Zone) -> Result<Self, InstantError> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
            return Ok(Self {
                local: parsed.naive_local(),
                offset: *parsed.offset(),
                zone: Zone::Fixed(*parsed.offset()),
            });
        }
        const FORMATS: [&str; 4] = [
            "%Y-%m-%d %H:%M:%S%.f",
            "%Y-%m-%dT%H:%M:%S%.f",
            "%Y-%m-%d %H:%M",
            "%Y-%m-%dT%H:%M",
        ];
        for format in FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
                return Ok(Self::from_parts(naive, zone));
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            return Ok(Self::from_parts(date.and_time(NaiveTime::MIN), zone));
        }
        Err(InstantError::InvalidFormat {
            input: input.to_string(),
        })
    }

    /// The local wall-clock reading.
    pub fn local(&self) -> NaiveDateTime {
        self.local
    }

    /// The zone this instant is viewed through.
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// The UTC offset in force at this instant.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// The UTC wall-clock reading of this instant.
    pub fn utc_naive(&self) -> NaiveDateTime {
        self.local - TimeDelta::seconds(i64::from(self.offset.local_minus_utc()))
    }

    /// Unix timestamp in whole seconds, truncated toward negative
    /// infinity for sub-second instants before the epoch.
    pub fn timestamp(&self) -> i64 {
        self.timestamp_micros().div_euclid(MICROS_PER_SECOND)
    }

    /// Unix timestamp in microseconds.
    pub fn timestamp_micros(&self) -> i64 {
        self.local.and_utc().timestamp_micros()
            - i64::from(self.offset.local_minus_utc()) * MICROS_PER_SECOND
    }

    /// The calendar-date portion in the local zone.
    pub fn date(&self) -> CalendarDate {
        CalendarDate::from_naive(self.local.date())
    }

    /// The time-of-day portion in the local zone.
    pub fn time_of_day(&self) -> Time {
        let time = self.local.time();
        Time::from_ticks(
            u64::from(time.num_seconds_from_midnight()) * 1_000_000
                + u64::from(time.nanosecond() / 1_000),
        )
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.local.year()
    }

    /// Returns the month (1..=12).
    pub fn month(&self) -> u32 {
        self.local.month()
    }

    /// Returns the day within the month.
    pub fn day(&self) -> u32 {
        self.local.day()
    }

    /// Returns the hour (0..=23).
    pub fn hour(&self) -> u32 {
        self.local.hour()
    }

    /// Returns the minute (0..=59).
    pub fn minute(&self) -> u32 {
        self.local.minute()
    }

    /// Returns the second (0..=59).
    pub fn second(&self) -> u32 {
        self.local.second()
    }

    /// Returns the microsecond (0..=999_999).
    pub fn microsecond(&self) -> u32 {
        self.local.nanosecond() / 1_000
    }

    /// Returns the day of the week.
    pub fn day_of_week(&self) -> Weekday {
        self.date().day_of_week()
    }

    /// Looks up a computed field by its string name.
    ///
    /// Supported names: `year`, `month`, `day`, `hour`, `minute`,
    /// `second`, `microsecond`, `dayOfWeek` (ISO, Monday = 1),
    /// `dayOfYear`, `weekOfYear`, `daysInMonth`, `quarter`, `half`,
    /// `timestamp`, `offset` (seconds), `offsetHours`.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::UnknownProperty`] for any other name.
    pub fn field(&self, name: &str) -> Result<i64, InstantError> {
        let date = self.date();
        Ok(match name {
            "year" => i64::from(self.year()),
            "month" => i64::from(self.month()),
            "day" => i64::from(self.day()),
            "hour" => i64::from(self.hour()),
            "minute" => i64::from(self.minute()),
            "second" => i64::from(self.second()),
            "microsecond" => i64::from(self.microsecond()),
            "dayOfWeek" => i64::from(self.day_of_week().number_from_monday()),
            "dayOfYear" => i64::from(date.day_of_year()),
            "weekOfYear" => i64::from(date.iso_week_of_year()),
            "daysInMonth" => i64::from(date.days_in_month()),
            "quarter" => i64::from(date.quarter()),
            "half" => i64::from(date.half()),
            "timestamp" => self.timestamp(),
            "offset" => i64::from(self.offset.local_minus_utc()),
            "offsetHours" => i64::from(self.offset.local_minus_utc() / 3600),
            _ => {
                return Err(InstantError::UnknownProperty {
                    name: name.to_string(),
                })
            }
        })
    }

    /// Moves this instant into another zone, preserving the absolute
    /// moment: only the wall-clock reading changes.
    pub fn set_timezone(self, zone: Zone) -> Self {
        Self::from_utc(self.utc_naive(), zone)
    }

    /// Replaces the calendar-date portion, preserving time-of-day and
    /// zone.
    pub fn set_date(self, date: CalendarDate) -> Self {
        Self::from_parts(date.naive().and_time(self.local.time()), self.zone)
    }

    /// Replaces the time-of-day, preserving date and zone.
    pub fn with_time(self, time: Time) -> Self {
        let time = NaiveTime::from_hms_micro_opt(
            time.hours(),
            time.minutes(),
            time.seconds(),
            time.microseconds(),
        )
        .expect("clock components are always in range");
        Self::from_parts(self.local.date().and_time(time), self.zone)
    }

    /// Replaces the time-of-day from raw components, each wrapped into
    /// its own range first (hours modulo 24, and so on).
    pub fn set_time(self, hours: i64, minutes: i64, seconds: i64, microseconds: i64) -> Self {
        self.with_time(Time::set_time(hours, minutes, seconds, microseconds))
    }

    fn map_date<F>(self, op: F) -> Result<Self, InstantError>
    where
        F: FnOnce(CalendarDate) -> Result<CalendarDate, CalendarError>,
    {
        Ok(self.set_date(op(self.date())?))
    }

    /// Replaces the year, clamping February 29 into common years.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::Calendar`] for an unrepresentable year.
    pub fn set_year(self, year: i32) -> Result<Self, InstantError> {
        self.map_date(|d| d.set_year(year))
    }

    /// Replaces the month, clamping the day into the target month.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::Calendar`] for a month outside 1..=12.
    pub fn set_month(self, month: u32) -> Result<Self, InstantError> {
        self.map_date(|d| d.set_month(month))
    }

    /// Replaces the day.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::Calendar`] when the day does not exist in
    /// this month.
    pub fn set_day(self, day: u32) -> Result<Self, InstantError> {
        self.map_date(|d| d.set_day(day))
    }

    /// Adds years with the clamping policy, preserving time-of-day.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::Calendar`] on calendar overflow.
    pub fn add_years(self, value: i32) -> Result<Self, InstantError> {
        self.map_date(|d| d.add_years(value))
    }

    /// Subtracts years with the clamping policy.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::Calendar`] on calendar overflow.
    pub fn sub_years(self, value: i32) -> Result<Self, InstantError> {
        self.map_date(|d| d.sub_years(value))
    }

    /// Adds years with the overflow policy.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::Calendar`] on calendar overflow.
    pub fn add_years_with_overflow(self, value: i32) -> Result<Self, InstantError> {
        self.map_date(|d| d.add_years_with_overflow(value))
    }

    /// Adds months with the clamping policy, preserving time-of-day.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::Calendar`] on calendar overflow.
    pub fn add_months(self, value: i32) -> Result<Self, InstantError> {
        self.map_date(|d| d.add_months(value))
    }

    /// Subtracts months with the clamping policy.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::Calendar`] on calendar overflow.
    pub fn sub_months(self, value: i32) -> Result<Self, InstantError> {
        self.map_date(|d| d.sub_months(value))
    }

    /// Adds months with the overflow policy.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::Calendar`] on calendar overflow.
    pub fn add_months_with_overflow(self, value: i32) -> Result<Self, InstantError> {
        self.map_date(|d| d.add_months_with_overflow(value))
    }

    /// Adds days, preserving time-of-day.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::Calendar`] on calendar overflow.
    pub fn add_days(self, value: i64) -> Result<Self, InstantError> {
        self.map_date(|d| d.add_days(value))
    }

    /// Subtracts days.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::Calendar`] on calendar overflow.
    pub fn sub_days(self, value: i64) -> Result<Self, InstantError> {
        self.map_date(|d| d.sub_days(value))
    }

    /// Adds whole weeks, preserving time-of-day.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::Calendar`] on calendar overflow.
    pub fn add_weeks(self, value: i64) -> Result<Self, InstantError> {
        self.map_date(|d| d.add_weeks(value))
    }

    /// Adds business days, skipping weekends and preserving time-of-day.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::Calendar`] on calendar overflow.
    pub fn add_weekdays(self, value: i64) -> Result<Self, InstantError> {
        self.map_date(|d| d.add_weekdays(value))
    }

    /// Moves to the next occurrence of a weekday (strictly forward),
    /// preserving time-of-day.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::Calendar`] on calendar overflow.
    pub fn next(self, day_of_week: Option<Weekday>) -> Result<Self, InstantError> {
        self.map_date(|d| d.next(day_of_week))
    }

    /// Moves to the previous occurrence of a weekday (strictly back),
    /// preserving time-of-day.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::Calendar`] on calendar overflow.
    pub fn previous(self, day_of_week: Option<Weekday>) -> Result<Self, InstantError> {
        self.map_date(|d| d.previous(day_of_week))
    }

    /// First occurrence of a weekday in this month, preserving
    /// time-of-day.
    pub fn first_of_month(self, day_of_week: Option<Weekday>) -> Self {
        self.set_date(self.date().first_of_month(day_of_week))
    }

    /// Last occurrence of a weekday in this month, preserving
    /// time-of-day.
    pub fn last_of_month(self, day_of_week: Option<Weekday>) -> Self {
        self.set_date(self.date().last_of_month(day_of_week))
    }

    /// Nth occurrence of a weekday in this month, or `None` outside it.
    pub fn nth_of_month(self, nth: u32, day_of_week: Weekday) -> Option<Self> {
        self.date()
            .nth_of_month(nth, day_of_week)
            .map(|d| self.set_date(d))
    }

    /// Nth occurrence of a weekday in this quarter, or `None` outside it.
    pub fn nth_of_quarter(self, nth: u32, day_of_week: Weekday) -> Option<Self> {
        self.date()
            .nth_of_quarter(nth, day_of_week)
            .map(|d| self.set_date(d))
    }

    /// Nth occurrence of a weekday in this year, or `None` outside it.
    pub fn nth_of_year(self, nth: u32, day_of_week: Weekday) -> Option<Self> {
        self.date()
            .nth_of_year(nth, day_of_week)
            .map(|d| self.set_date(d))
    }

    /// Midnight of this day.
    pub fn start_of_day(self) -> Self {
        Self::from_parts(self.local.date().and_time(NaiveTime::MIN), self.zone)
    }

    /// The last representable microsecond of this day.
    pub fn end_of_day(self) -> Self {
        self.set_time(23, 59, 59, 999_999)
    }

    /// Alias for [`Instant::start_of_day`].
    pub fn midnight(self) -> Self {
        self.start_of_day()
    }

    /// Noon of this day.
    pub fn noon(self) -> Self {
        self.set_time(12, 0, 0, 0)
    }

    /// Midnight of the configured first day of this week.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::Calendar`] on calendar overflow.
    pub fn start_of_week(self) -> Result<Self, InstantError> {
        Ok(self.map_date(CalendarDate::start_of_week)?.start_of_day())
    }

    /// End of the configured last day of this week.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::Calendar`] on calendar overflow.
    pub fn end_of_week(self) -> Result<Self, InstantError> {
        Ok(self.map_date(CalendarDate::end_of_week)?.end_of_day())
    }

    /// Midnight of the first day of this month.
    pub fn start_of_month(self) -> Self {
        self.set_date(self.date().start_of_month()).start_of_day()
    }

    /// End of the last day of this month.
    pub fn end_of_month(self) -> Self {
        self.set_date(self.date().end_of_month()).end_of_day()
    }

    /// Midnight of the first day of this quarter.
    pub fn start_of_quarter(self) -> Self {
        self.set_date(self.date().start_of_quarter()).start_of_day()
    }

    /// End of the last day of this quarter.
    pub fn end_of_quarter(self) -> Self {
        self.set_date(self.date().end_of_quarter()).end_of_day()
    }

    /// Midnight of January 1.
    pub fn start_of_year(self) -> Self {
        self.set_date(self.date().start_of_year()).start_of_day()
    }

    /// End of December 31.
    pub fn end_of_year(self) -> Self {
        self.set_date(self.date().end_of_year()).end_of_day()
    }

    /// Midnight of January 1 of this decade.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::Calendar`] at the year-range edge.
    pub fn start_of_decade(self) -> Result<Self, InstantError> {
        Ok(self.map_date(CalendarDate::start_of_decade)?.start_of_day())
    }

    /// End of December 31 of this decade.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::Calendar`] at the year-range edge.
    pub fn end_of_decade(self) -> Result<Self, InstantError> {
        Ok(self.map_date(CalendarDate::end_of_decade)?.end_of_day())
    }

    /// Midnight of January 1 of this century.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::Calendar`] at the year-range edge.
    pub fn start_of_century(self) -> Result<Self, InstantError> {
        Ok(self
            .map_date(CalendarDate::start_of_century)?
            .start_of_day())
    }

    /// End of December 31 of this century.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::Calendar`] at the year-range edge.
    pub fn end_of_century(self) -> Result<Self, InstantError> {
        Ok(self.map_date(CalendarDate::end_of_century)?.end_of_day())
    }

    fn shift_micros(self, micros: i64) -> Result<Self, InstantError> {
        let total = self
            .timestamp_micros()
            .checked_add(micros)
            .ok_or(InstantError::OutOfRange)?;
        let utc = DateTime::from_timestamp_micros(total)
            .ok_or(InstantError::OutOfRange)?
            .naive_utc();
        Ok(Self::from_utc(utc, self.zone))
    }

    /// Adds hours along the absolute timeline; the offset is re-resolved
    /// afterwards, so daylight-saving transitions shift the wall clock.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::OutOfRange`] on overflow.
    pub fn add_hours(self, value: i64) -> Result<Self, InstantError> {
        self.shift_micros(
            value
                .checked_mul(3_600 * MICROS_PER_SECOND)
                .ok_or(InstantError::OutOfRange)?,
        )
    }

    /// Adds minutes along the absolute timeline.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::OutOfRange`] on overflow.
    pub fn add_minutes(self, value: i64) -> Result<Self, InstantError> {
        self.shift_micros(
            value
                .checked_mul(60 * MICROS_PER_SECOND)
                .ok_or(InstantError::OutOfRange)?,
        )
    }

    /// Adds seconds along the absolute timeline.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::OutOfRange`] on overflow.
    pub fn add_seconds(self, value: i64) -> Result<Self, InstantError> {
        self.shift_micros(
            value
                .checked_mul(MICROS_PER_SECOND)
                .ok_or(InstantError::OutOfRange)?,
        )
    }

    /// Adds microseconds along the absolute timeline.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::OutOfRange`] on overflow.
    pub fn add_microseconds(self, value: i64) -> Result<Self, InstantError> {
        self.shift_micros(value)
    }

    /// Applies a relative expression (`+2 days`, `next tuesday, noon`,
    /// `first day of next month`, ...) to this instant.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::InvalidModifier`] for unrecognized
    /// clauses.
    pub fn modify(self, expr: &str) -> Result<Self, InstantError> {
        relative::apply(self, expr)
    }

    /// Returns whether this instant lies between two bounds, normalizing
    /// their order first.
    pub fn between(self, first: Instant, second: Instant, inclusive: bool) -> bool {
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

    /// The candidate nearest to this instant, or `None` for an empty
    /// slice. Ties keep the earliest-listed candidate.
    pub fn closest(self, candidates: &[Instant]) -> Option<Instant> {
        let mut best: Option<(i64, Instant)> = None;
        for &candidate in candidates {
            let distance = (candidate.timestamp_micros() - self.timestamp_micros()).abs();
            if best.is_none() || distance < best.map(|(d, _)| d).unwrap_or(i64::MAX) {
                best = Some((distance, candidate));
            }
        }
        best.map(|(_, instant)| instant)
    }

    /// The candidate furthest from this instant, or `None` for an empty
    /// slice. Ties keep the earliest-listed candidate.
    pub fn farthest(self, candidates: &[Instant]) -> Option<Instant> {
        let mut best: Option<(i64, Instant)> = None;
        for &candidate in candidates {
            let distance = (candidate.timestamp_micros() - self.timestamp_micros()).abs();
            if best.is_none() || distance > best.map(|(d, _)| d).unwrap_or(i64::MIN) {
                best = Some((distance, candidate));
            }
        }
        best.map(|(_, instant)| instant)
    }

    /// The earlier of this instant and `other` (default: now).
    pub fn min(self, other: Option<Instant>) -> Instant {
        let other = other.unwrap_or_else(|| Self::now(None));
        if self <= other {
            self
        } else {
            other
        }
    }

    /// The later of this instant and `other` (default: now).
    pub fn max(self, other: Option<Instant>) -> Instant {
        let other = other.unwrap_or_else(|| Self::now(None));
        if self >= other {
            self
        } else {
            other
        }
    }

    /// The midpoint between this instant and `other` (default: now),
    /// at second resolution, truncating toward this instant.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::OutOfRange`] on overflow.
    pub fn average(self, other: Option<Instant>) -> Result<Instant, InstantError> {
        let other = other.unwrap_or_else(|| Self::now(None));
        self.add_seconds(self.diff_in_seconds(&other, false) / 2)
    }

    /// Component-wise difference to another instant, computed over wall
    /// clocks after moving `other` into this instant's zone.
    pub fn diff(&self, other: &Instant) -> Diff {
        let other_here = other.set_timezone(self.zone);
        let inverted = *other < *self;
        let (earlier, later) = if inverted {
            (other_here.local, self.local)
        } else {
            (self.local, other_here.local)
        };

        let mut micros = micro_of_day(later) - micro_of_day(earlier);
        let mut later_date = CalendarDate::from_naive(later.date());
        if micros < 0 {
            micros += MICROS_PER_DAY;
            later_date = later_date
                .add_days(-1)
                .expect("borrowing one day stays in range");
        }
        let date_diff = CalendarDate::from_naive(earlier.date()).diff(&later_date);

        Diff {
            years: date_diff.years,
            months: date_diff.months,
            days: date_diff.days,
            total_days: (later - earlier).num_days(),
            hours: micros / (3_600 * MICROS_PER_SECOND),
            minutes: micros % (3_600 * MICROS_PER_SECOND) / (60 * MICROS_PER_SECOND),
            seconds: micros % (60 * MICROS_PER_SECOND) / MICROS_PER_SECOND,
            microseconds: micros % MICROS_PER_SECOND,
            inverted,
        }
    }

    /// Difference in whole calendar years.
    pub fn diff_in_years(&self, other: &Instant, absolute: bool) -> i64 {
        let diff = self.diff(other);
        if absolute {
            diff.years
        } else {
            diff.signed(diff.years)
        }
    }

    /// Difference in whole calendar months.
    pub fn diff_in_months(&self, other: &Instant, absolute: bool) -> i64 {
        let diff = self.diff(other);
        if absolute {
            diff.total_months()
        } else {
            diff.signed(diff.total_months())
        }
    }

    /// Difference in whole calendar months with both wall clocks
    /// re-anchored to UTC, so only the local readings matter.
    pub fn diff_in_months_ignore_timezone(&self, other: &Instant, absolute: bool) -> i64 {
        let this = Self::from_parts(self.local, Zone::UTC);
        let that = Self::from_parts(other.local, Zone::UTC);
        this.diff_in_months(&that, absolute)
    }

    /// Difference in whole weeks of elapsed time, truncated toward zero.
    pub fn diff_in_weeks(&self, other: &Instant, absolute: bool) -> i64 {
        self.diff_in_seconds(other, absolute) / (7 * 86_400)
    }

    /// Difference in whole days of elapsed time, truncated toward zero.
    pub fn diff_in_days(&self, other: &Instant, absolute: bool) -> i64 {
        self.diff_in_seconds(other, absolute) / 86_400
    }

    /// Difference in whole hours of elapsed time, truncated toward zero.
    pub fn diff_in_hours(&self, other: &Instant, absolute: bool) -> i64 {
        self.diff_in_seconds(other, absolute) / 3_600
    }

    /// Difference in whole minutes of elapsed time, truncated toward
    /// zero.
    pub fn diff_in_minutes(&self, other: &Instant, absolute: bool) -> i64 {
        self.diff_in_seconds(other, absolute) / 60
    }

    /// Difference in whole seconds of elapsed time, truncated toward
    /// zero. Positive when `other` is later.
    pub fn diff_in_seconds(&self, other: &Instant, absolute: bool) -> i64 {
        let seconds =
            (other.timestamp_micros() - self.timestamp_micros()) / MICROS_PER_SECOND;
        if absolute {
            seconds.abs()
        } else {
            seconds
        }
    }

    /// Difference in microseconds of elapsed time.
    pub fn diff_in_microseconds(&self, other: &Instant, absolute: bool) -> i64 {
        let micros = other.timestamp_micros() - self.timestamp_micros();
        if absolute {
            micros.abs()
        } else {
            micros
        }
    }
}

fn micro_of_day(value: NaiveDateTime) -> i64 {
    let time = value.time();
    i64::from(time.num_seconds_from_midnight()) * MICROS_PER_SECOND
        + i64::from(time.nanosecond() / 1_000)
}

impl PartialEq for Instant {
    fn eq(&self, other: &Self) -> bool {
        self.timestamp_micros() == other.timestamp_micros()
    }
}

impl Eq for Instant {}

impl PartialOrd for Instant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Instant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp_micros().cmp(&other.timestamp_micros())
    }
}

impl Hash for Instant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.timestamp_micros().hash(state);
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zoned = DateTime::<FixedOffset>::from_naive_utc_and_offset(self.utc_naive(), self.offset);
        write!(f, "{}", zoned.format("%Y-%m-%d %H:%M:%S%.f%:z"))
    }
}

impl FromStr for Instant {
    type Err = InstantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc_at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Instant {
        Instant::create(y, m, d, h, min, s, 0, None).unwrap()
    }

    #[test]
    fn create_validates_components() {
        assert!(Instant::create(2024, 2, 30, 0, 0, 0, 0, None).is_err());
        assert!(Instant::create(2024, 2, 28, 25, 0, 0, 0, None).is_err());
        let i = utc_at(2024, 2, 28, 23, 59, 59);
        assert_eq!(i.hour(), 23);
    }

    #[test]
    fn timestamps_round_trip() {
        let i = Instant::from_timestamp(1_700_000_000, None).unwrap();
        assert_eq!(i.timestamp(), 1_700_000_000);
        assert_eq!(i.year(), 2023);

        let j = Instant::from_timestamp_micros(1_500_000, None).unwrap();
        assert_eq!(j.timestamp(), 1);
        assert_eq!(j.microsecond(), 500_000);
    }

    #[test]
    fn equality_crosses_zones() {
        let utc = Instant::parse("2024-06-01 12:00:00", None).unwrap();
        let zurich = utc.set_timezone(Zone::parse("Europe/Zurich").unwrap());
        assert_eq!(zurich.hour(), 14);
        assert_eq!(utc, zurich);
        assert_eq!(utc.timestamp(), zurich.timestamp());
    }

    #[test]
    fn parse_literal_forms() {
        let i = Instant::parse("2024-03-15 10:30:45", None).unwrap();
        assert_eq!((i.year(), i.hour(), i.second()), (2024, 10, 45));

        let d = Instant::parse("2024-03-15", None).unwrap();
        assert_eq!(d.hour(), 0);

        let t = Instant::parse("2024-03-15T10:30", None).unwrap();
        assert_eq!(t.minute(), 30);

        let f = Instant::parse("2024-03-15 10:30:45.123456", None).unwrap();
        assert_eq!(f.microsecond(), 123_456);
    }

    #[test]
    fn parse_offset_form_wins_over_zone_argument() {
        let i = Instant::parse("2024-03-15T10:30:45+05:30", Some(Zone::UTC)).unwrap();
        assert_eq!(i.offset().local_minus_utc(), 5 * 3600 + 30 * 60);
        assert_eq!(i.hour(), 10);
        assert_eq!(i.timestamp(), utc_at(2024, 3, 15, 5, 0, 45).timestamp());
    }

    #[test]
    fn parse_digit_string_is_a_timestamp() {
        let i = Instant::parse("1700000000", None).unwrap();
        assert_eq!(i.timestamp(), 1_700_000_000);
    }

    #[test]
    fn parse_garbage_fails() {
        assert!(matches!(
            Instant::parse("definitely not a date", None),
            Err(InstantError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn create_from_format_variants() {
        let i = Instant::create_from_format("15/03/2024 10:30", "%d/%m/%Y %H:%M", None).unwrap();
        assert_eq!((i.day(), i.minute()), (15, 30));

        let d = Instant::create_from_format("2024.075", "%Y.%j", None).unwrap();
        assert_eq!((d.month(), d.day(), d.hour()), (3, 15, 0));

        let z = Instant::create_from_format(
            "2024-03-15 10:30 +0200",
            "%Y-%m-%d %H:%M %z",
            None,
        )
        .unwrap();
        assert_eq!(z.offset().local_minus_utc(), 7200);

        assert!(Instant::create_from_format("nope", "%Y-%m-%d", None).is_err());
    }

    #[test]
    fn field_lookup() {
        let i = utc_at(2024, 3, 15, 10, 30, 45);
        assert_eq!(i.field("year").unwrap(), 2024);
        assert_eq!(i.field("dayOfWeek").unwrap(), 5); // Friday
        assert_eq!(i.field("quarter").unwrap(), 1);
        assert_eq!(i.field("daysInMonth").unwrap(), 31);
        assert_eq!(i.field("offset").unwrap(), 0);
        assert!(matches!(
            i.field("era"),
            Err(InstantError::UnknownProperty { .. })
        ));
    }

    #[test]
    fn calendar_navigation_preserves_time() {
        let i = utc_at(2012, 1, 31, 8, 15, 0);
        let next_month = i.add_months(1).unwrap();
        assert_eq!(next_month.day(), 29);
        assert_eq!(next_month.hour(), 8);

        let weekday = utc_at(2012, 1, 6, 17, 0, 0).add_weekdays(1).unwrap();
        assert_eq!(weekday.day(), 9);
        assert_eq!(weekday.hour(), 17);
    }

    #[test]
    fn clock_arithmetic_is_absolute() {
        let i = utc_at(2024, 3, 15, 23, 30, 0);
        let later = i.add_hours(1).unwrap();
        assert_eq!((later.day(), later.hour()), (16, 0));
        assert_eq!(i.add_seconds(-1).unwrap().second(), 59);
        assert_eq!(i.add_microseconds(1).unwrap().microsecond(), 1);
    }

    #[test]
    fn hour_addition_crosses_dst() {
        // One absolute hour over the Zurich spring-forward gap moves the
        // wall clock by two hours.
        let zurich = Zone::parse("Europe/Zurich").unwrap();
        let before = Instant::create(2024, 3, 31, 1, 30, 0, 0, Some(zurich)).unwrap();
        let after = before.add_hours(1).unwrap();
        assert_eq!(after.hour(), 3);
        assert_eq!(before.diff_in_seconds(&after, true), 3600);
    }

    #[test]
    fn day_boundaries() {
        let i = utc_at(2024, 3, 15, 10, 30, 45);
        assert_eq!(i.start_of_day().hour(), 0);
        let end = i.end_of_day();
        assert_eq!((end.hour(), end.microsecond()), (23, 999_999));
        assert_eq!(i.noon().hour(), 12);
    }

    #[test]
    fn period_boundaries_reset_time() {
        let i = utc_at(2024, 5, 15, 10, 30, 45);
        assert_eq!(i.start_of_month().day(), 1);
        assert_eq!(i.start_of_month().hour(), 0);
        assert_eq!(i.end_of_quarter().month(), 6);
        assert_eq!(i.end_of_quarter().hour(), 23);
        assert_eq!(i.start_of_year().month(), 1);
    }

    #[test]
    fn between_and_selection() {
        let a = utc_at(2024, 1, 1, 0, 0, 0);
        let b = utc_at(2024, 6, 1, 0, 0, 0);
        let m = utc_at(2024, 3, 1, 0, 0, 0);
        assert!(m.between(a, b, true));
        assert!(m.between(b, a, true));
        assert!(!a.between(a, b, false));

        assert_eq!(m.closest(&[a, b]), Some(a));
        assert_eq!(m.farthest(&[a, b]), Some(b));
        assert_eq!(m.closest(&[]), None);
        assert_eq!(a.min(Some(b)), a);
        assert_eq!(a.max(Some(b)), b);
    }

    #[test]
    fn closest_tie_keeps_first_listed() {
        let center = utc_at(2024, 3, 1, 12, 0, 0);
        let before = utc_at(2024, 3, 1, 11, 0, 0);
        let after = utc_at(2024, 3, 1, 13, 0, 0);
        assert_eq!(center.closest(&[before, after]), Some(before));
        assert_eq!(center.farthest(&[before, after]), Some(before));
    }

    #[test]
    fn average_is_the_midpoint() {
        let a = utc_at(2024, 3, 1, 0, 0, 0);
        let b = utc_at(2024, 3, 3, 0, 0, 0);
        assert_eq!(a.average(Some(b)).unwrap(), utc_at(2024, 3, 2, 0, 0, 0));
    }

    #[test]
    fn diff_components_with_time_borrow() {
        let a = utc_at(2024, 1, 15, 10, 0, 0);
        let b = utc_at(2024, 3, 15, 9, 0, 0);
        let diff = a.diff(&b);
        assert_eq!((diff.years, diff.months, diff.days), (0, 1, 30));
        assert_eq!(diff.hours, 23);
        assert!(!diff.inverted);
    }

    #[test]
    fn diff_in_units_truncate() {
        let a = utc_at(2024, 1, 1, 0, 0, 0);
        let b = utc_at(2024, 1, 2, 23, 59, 59);
        assert_eq!(a.diff_in_days(&b, true), 1);
        assert_eq!(a.diff_in_hours(&b, true), 47);
        assert_eq!(b.diff_in_hours(&a, false), -47);
    }

    #[test]
    fn diff_in_months_ignore_timezone_uses_wall_clocks() {
        // Four wall-clock month boundaries apart, but less than four
        // absolute months because of the offset difference.
        let tokyo = Zone::parse("Asia/Tokyo").unwrap();
        let a = Instant::create(2019, 6, 1, 0, 0, 0, 0, Some(tokyo)).unwrap();
        let b = Instant::create(2019, 10, 1, 0, 0, 0, 0, Some(Zone::UTC)).unwrap();
        assert_eq!(a.diff_in_months(&b, true), 4);
        assert_eq!(a.diff_in_months_ignore_timezone(&b, true), 4);

        let c = Instant::create(2019, 9, 30, 20, 0, 0, 0, Some(Zone::UTC)).unwrap();
        assert_eq!(a.diff_in_months(&c, true), 4);
        assert_eq!(a.diff_in_months_ignore_timezone(&c, true), 3);
    }

    #[test]
    fn diff_in_months_ignore_timezone_exceeds_plain_diff() {
        // 2019-10-01 00:00 in Tokyo is 2019-09-30 15:00 UTC, so the
        // absolute diff falls a day short of four months while the
        // wall clocks are exactly four month boundaries apart.
        let tokyo = Zone::parse("Asia/Tokyo").unwrap();
        let a = Instant::create(2019, 6, 1, 0, 0, 0, 0, Some(Zone::UTC)).unwrap();
        let b = Instant::create(2019, 10, 1, 0, 0, 0, 0, Some(tokyo)).unwrap();
        assert_eq!(a.diff_in_months(&b, true), 3);
        assert_eq!(a.diff_in_months_ignore_timezone(&b, true), 4);
    }

    #[test]
    fn display_shows_offset() {
        let i = utc_at(2024, 3, 15, 10, 30, 45);
        assert_eq!(i.to_string(), "2024-03-15 10:30:45+00:00");
    }
}
