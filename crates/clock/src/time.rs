//! Tick-based time-of-day newtype.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::ClockError;

/// Ticks per microsecond (the base tick unit).
pub const TICKS_PER_MICROSECOND: u64 = 1;

/// Ticks per second.
pub const TICKS_PER_SECOND: u64 = 1_000_000;

/// Ticks per minute.
pub const TICKS_PER_MINUTE: u64 = TICKS_PER_SECOND * 60;

/// Ticks per hour.
pub const TICKS_PER_HOUR: u64 = TICKS_PER_MINUTE * 60;

/// Ticks per day. All [`Time`] values are strictly below this bound.
pub const TICKS_PER_DAY: u64 = TICKS_PER_HOUR * 24;

/// An immutable wall-clock time of day with microsecond resolution.
///
/// Stored as microsecond ticks since midnight, always in
/// `[0, TICKS_PER_DAY)`. Hour, minute, second and microsecond are derived
/// by integer division and modulo; nothing is stored redundantly.
///
/// Every setter returns a new value. Out-of-range setter inputs wrap with
/// a floor-modulo (`set_hours(-1)` lands on 23) rather than failing; only
/// string parsing rejects invalid values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(u64);

fn time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*(\d{1,2})[:.](\d{1,2})(?:[:.](\d{1,2})(?:\.(\d+))?)?\s*$")
            .expect("time pattern is valid")
    })
}

impl Time {
    /// Creates a `Time` from raw microsecond ticks.
    ///
    /// Ticks at or above [`TICKS_PER_DAY`] wrap around into the day, the
    /// same wrap-around policy the setters use.
    pub fn from_ticks(ticks: u64) -> Self {
        Self(ticks % TICKS_PER_DAY)
    }

    /// Creates a `Time` set to `00:00:00.000000`.
    pub fn midnight() -> Self {
        Self(0)
    }

    /// Creates a `Time` set to `12:00:00.000000`.
    pub fn noon() -> Self {
        Self(12 * TICKS_PER_HOUR)
    }

    /// Parses a time-of-day string.
    ///
    /// The accepted grammar is `HH[:.]mm`, optionally followed by
    /// `[:.]ss` and a fractional `.u` part. Hours must be at most 23,
    /// minutes and seconds at most 59. Fractional digits beyond
    /// microsecond precision are truncated, not rounded.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidFormat`] if the string does not match
    /// the grammar or a field is out of range.
    pub fn parse(input: &str) -> Result<Self, ClockError> {
        let invalid = || ClockError::InvalidFormat {
            input: input.to_string(),
        };
        let caps = time_pattern().captures(input).ok_or_else(invalid)?;

        let hours: u64 = caps[1].parse().map_err(|_| invalid())?;
        let minutes: u64 = caps[2].parse().map_err(|_| invalid())?;
        let seconds: u64 = match caps.get(3) {
            Some(m) => m.as_str().parse().map_err(|_| invalid())?,
            None => 0,
        };
        let microseconds: u64 = match caps.get(4) {
            Some(m) => {
                let digits: String = m.as_str().chars().take(6).collect();
                digits.parse().map_err(|_| invalid())?
            }
            None => 0,
        };

        if hours > 23 || minutes > 59 || seconds > 59 {
            return Err(invalid());
        }

        Ok(Self(
            hours * TICKS_PER_HOUR
                + minutes * TICKS_PER_MINUTE
                + seconds * TICKS_PER_SECOND
                + microseconds * TICKS_PER_MICROSECOND,
        ))
    }

    /// Returns the raw microsecond ticks since midnight.
    pub fn ticks(self) -> u64 {
        self.0
    }

    /// Returns the hour (0..=23).
    pub fn hours(self) -> u32 {
        (self.0 / TICKS_PER_HOUR) as u32
    }

    /// Returns the minute (0..=59).
    pub fn minutes(self) -> u32 {
        (self.0 % TICKS_PER_HOUR / TICKS_PER_MINUTE) as u32
    }

    /// Returns the second (0..=59).
    pub fn seconds(self) -> u32 {
        (self.0 % TICKS_PER_MINUTE / TICKS_PER_SECOND) as u32
    }

    /// Returns the microsecond (0..=999_999).
    pub fn microseconds(self) -> u32 {
        (self.0 % TICKS_PER_SECOND / TICKS_PER_MICROSECOND) as u32
    }

    /// Returns a new `Time` with the hour component replaced.
    ///
    /// The whole value wraps around the day with a floor-modulo, so
    /// negative inputs travel backwards through midnight:
    /// `set_hours(-1)` on `10:30` yields `23:30`.
    pub fn set_hours(self, hours: i64) -> Self {
        let base = (self.0 % TICKS_PER_HOUR) as i128;
        Self::wrap(base + hours as i128 * TICKS_PER_HOUR as i128)
    }

    /// Returns a new `Time` with the minute component replaced.
    ///
    /// Same floor-modulo wrap-around policy as [`Time::set_hours`];
    /// borrowed units carry into the hour.
    pub fn set_minutes(self, minutes: i64) -> Self {
        let base = (self.0 - (self.0 % TICKS_PER_HOUR - self.0 % TICKS_PER_MINUTE)) as i128;
        Self::wrap(base + minutes as i128 * TICKS_PER_MINUTE as i128)
    }

    /// Returns a new `Time` with the second component replaced.
    ///
    /// Same floor-modulo wrap-around policy as [`Time::set_hours`].
    pub fn set_seconds(self, seconds: i64) -> Self {
        let base = (self.0 - (self.0 % TICKS_PER_MINUTE - self.0 % TICKS_PER_SECOND)) as i128;
        Self::wrap(base + seconds as i128 * TICKS_PER_SECOND as i128)
    }

    /// Returns a new `Time` with the microsecond component replaced.
    ///
    /// Same floor-modulo wrap-around policy as [`Time::set_hours`].
    pub fn set_microseconds(self, microseconds: i64) -> Self {
        let base = (self.0 - self.0 % TICKS_PER_SECOND) as i128;
        Self::wrap(base + microseconds as i128 * TICKS_PER_MICROSECOND as i128)
    }

    /// Returns a new `Time` built from the given components.
    ///
    /// Each field is floor-modulo wrapped into its own range first
    /// (hours into 0..24, minutes and seconds into 0..60, microseconds
    /// into 0..1_000_000), then the fields are composed.
    pub fn set_time(hours: i64, minutes: i64, seconds: i64, microseconds: i64) -> Self {
        let hours = hours.rem_euclid(24) as u64;
        let minutes = minutes.rem_euclid(60) as u64;
        let seconds = seconds.rem_euclid(60) as u64;
        let microseconds = microseconds.rem_euclid(1_000_000) as u64;

        Self(
            hours * TICKS_PER_HOUR
                + minutes * TICKS_PER_MINUTE
                + seconds * TICKS_PER_SECOND
                + microseconds * TICKS_PER_MICROSECOND,
        )
    }

    /// Returns whether this time lies between `start` and `end`.
    ///
    /// The bounds are normalized first: passing them in either order gives
    /// the same answer. With `inclusive` the bounds themselves count as
    /// inside the range.
    pub fn between(self, start: Time, end: Time, inclusive: bool) -> bool {
        let (start, end) = if start > end { (end, start) } else { (start, end) };
        if inclusive {
            start <= self && self <= end
        } else {
            start < self && self < end
        }
    }

    fn wrap(ticks: i128) -> Self {
        Self(ticks.rem_euclid(TICKS_PER_DAY as i128) as u64)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        )?;
        if self.microseconds() > 0 {
            write!(f, ".{:06}", self.microseconds())?;
        }
        Ok(())
    }
}

impl FromStr for Time {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hours_minutes() {
        let t = Time::parse("10:30").unwrap();
        assert_eq!(t.hours(), 10);
        assert_eq!(t.minutes(), 30);
        assert_eq!(t.seconds(), 0);
        assert_eq!(t.microseconds(), 0);
    }

    #[test]
    fn parse_dot_separator() {
        let t = Time::parse("10.30.45").unwrap();
        assert_eq!(t.hours(), 10);
        assert_eq!(t.minutes(), 30);
        assert_eq!(t.seconds(), 45);
    }

    #[test]
    fn parse_fractional_seconds() {
        let t = Time::parse("10:30:45.123456").unwrap();
        assert_eq!(t.microseconds(), 123_456);
    }

    #[test]
    fn parse_truncates_excess_fraction_digits() {
        let t = Time::parse("10:30:45.1234567").unwrap();
        assert_eq!(t.microseconds(), 123_456);
    }

    #[test]
    fn parse_short_fraction_is_not_padded() {
        let t = Time::parse("10:30:45.5").unwrap();
        assert_eq!(t.microseconds(), 5);
    }

    #[test]
    fn parse_surrounding_whitespace() {
        let t = Time::parse("  6:05  ").unwrap();
        assert_eq!(t.hours(), 6);
        assert_eq!(t.minutes(), 5);
    }

    #[test]
    fn parse_hour_out_of_range() {
        assert_eq!(
            Time::parse("25:00").unwrap_err(),
            ClockError::InvalidFormat {
                input: "25:00".to_string(),
            }
        );
    }

    #[test]
    fn parse_minute_out_of_range() {
        assert!(Time::parse("10:60").is_err());
    }

    #[test]
    fn parse_second_out_of_range() {
        assert!(Time::parse("10:30:60").is_err());
    }

    #[test]
    fn parse_garbage() {
        assert!(Time::parse("not a time").is_err());
        assert!(Time::parse("").is_err());
        assert!(Time::parse("10").is_err());
    }

    #[test]
    fn getters_from_ticks() {
        let t = Time::from_ticks(
            13 * TICKS_PER_HOUR + 59 * TICKS_PER_MINUTE + 58 * TICKS_PER_SECOND + 7,
        );
        assert_eq!(t.hours(), 13);
        assert_eq!(t.minutes(), 59);
        assert_eq!(t.seconds(), 58);
        assert_eq!(t.microseconds(), 7);
    }

    #[test]
    fn from_ticks_wraps_at_day() {
        assert_eq!(Time::from_ticks(TICKS_PER_DAY), Time::midnight());
        assert_eq!(Time::from_ticks(TICKS_PER_DAY + 1).microseconds(), 1);
    }

    #[test]
    fn set_hours_negative_wraps_to_top() {
        let t = Time::parse("10:30").unwrap();
        let shifted = t.set_hours(-1);
        assert_eq!(shifted.hours(), 23);
        assert_eq!(shifted.minutes(), 30);
    }

    #[test]
    fn set_hours_positive_wraps_past_day() {
        let t = Time::parse("10:30").unwrap();
        assert_eq!(t.set_hours(24).hours(), 0);
        assert_eq!(t.set_hours(25).hours(), 1);
    }

    #[test]
    fn set_minutes_borrows_from_hour() {
        let t = Time::parse("10:30").unwrap();
        let shifted = t.set_minutes(-1);
        assert_eq!(shifted.hours(), 9);
        assert_eq!(shifted.minutes(), 59);
    }

    #[test]
    fn set_seconds_keeps_coarser_fields() {
        let t = Time::parse("10:30:45").unwrap();
        let shifted = t.set_seconds(5);
        assert_eq!(shifted.hours(), 10);
        assert_eq!(shifted.minutes(), 30);
        assert_eq!(shifted.seconds(), 5);
    }

    #[test]
    fn set_microseconds_keeps_second() {
        let t = Time::parse("10:30:45.999999").unwrap();
        let shifted = t.set_microseconds(1);
        assert_eq!(shifted.seconds(), 45);
        assert_eq!(shifted.microseconds(), 1);
    }

    #[test]
    fn set_time_wraps_per_field() {
        let t = Time::set_time(-1, -1, 0, 0);
        assert_eq!(t.hours(), 23);
        assert_eq!(t.minutes(), 59);
        assert_eq!(t.seconds(), 0);
    }

    #[test]
    fn set_time_plain() {
        let t = Time::set_time(6, 30, 15, 250_000);
        assert_eq!(t.hours(), 6);
        assert_eq!(t.minutes(), 30);
        assert_eq!(t.seconds(), 15);
        assert_eq!(t.microseconds(), 250_000);
    }

    #[test]
    fn midnight_and_noon() {
        assert_eq!(Time::midnight().ticks(), 0);
        assert_eq!(Time::noon().hours(), 12);
    }

    #[test]
    fn ordering() {
        let early = Time::parse("06:00").unwrap();
        let late = Time::parse("18:00").unwrap();
        assert!(early < late);
        assert_eq!(early, Time::parse("6.00").unwrap());
    }

    #[test]
    fn between_normalizes_bounds() {
        let t = Time::parse("12:00").unwrap();
        let a = Time::parse("10:00").unwrap();
        let b = Time::parse("14:00").unwrap();
        assert!(t.between(a, b, true));
        assert!(t.between(b, a, true));
    }

    #[test]
    fn between_exclusive_bounds() {
        let a = Time::parse("10:00").unwrap();
        let b = Time::parse("14:00").unwrap();
        assert!(a.between(a, b, true));
        assert!(!a.between(a, b, false));
    }

    #[test]
    fn display_omits_zero_fraction() {
        assert_eq!(Time::parse("06:30").unwrap().to_string(), "06:30:00");
        assert_eq!(
            Time::parse("06:30:15.000500").unwrap().to_string(),
            "06:30:15.000500"
        );
    }

    #[test]
    fn from_str_roundtrip() {
        let t: Time = "23:59:59.999999".parse().unwrap();
        assert_eq!(t.to_string(), "23:59:59.999999");
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<Time>();
    }
}
