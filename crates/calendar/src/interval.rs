//! Calendar/time interval literals.

use std::fmt;

use crate::error::CalendarError;

/// A duration expressed in named calendar and clock components.
///
/// Components are non-negative magnitudes; direction is chosen by the
/// operation applying the interval (`add_interval` vs `sub_interval`).
/// Calendar components (years, months) are kept distinct from day and
/// clock components because their length depends on where they are
/// applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Interval {
    /// Whole years.
    pub years: u64,
    /// Whole months.
    pub months: u64,
    /// Whole weeks. Folded into days when emitting ISO-8601 form.
    pub weeks: u64,
    /// Whole days.
    pub days: u64,
    /// Whole hours.
    pub hours: u64,
    /// Whole minutes.
    pub minutes: u64,
    /// Whole seconds.
    pub seconds: u64,
    /// Microseconds.
    pub microseconds: u64,
}

macro_rules! interval_component {
    ($constructor:ident, $setter:ident, $field:ident) => {
        /// Creates an interval holding only this component.
        ///
        /// # Errors
        ///
        /// Returns [`CalendarError::NegativeComponent`] for negative counts.
        pub fn $constructor(value: i64) -> Result<Self, CalendarError> {
            Self::default().$setter(value)
        }

        /// Returns a copy with this component replaced.
        ///
        /// # Errors
        ///
        /// Returns [`CalendarError::NegativeComponent`] for negative counts.
        pub fn $setter(mut self, value: i64) -> Result<Self, CalendarError> {
            if value < 0 {
                return Err(CalendarError::NegativeComponent {
                    component: stringify!($field),
                    value,
                });
            }
            self.$field = value as u64;
            Ok(self)
        }
    };
}

impl Interval {
    interval_component!(of_years, with_years, years);
    interval_component!(of_months, with_months, months);
    interval_component!(of_weeks, with_weeks, weeks);
    interval_component!(of_days, with_days, days);
    interval_component!(of_hours, with_hours, hours);
    interval_component!(of_minutes, with_minutes, minutes);
    interval_component!(of_seconds, with_seconds, seconds);
    interval_component!(of_microseconds, with_microseconds, microseconds);

    /// Returns whether every component is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Returns whether the interval carries any time-of-day component.
    pub fn has_time(&self) -> bool {
        self.hours > 0 || self.minutes > 0 || self.seconds > 0 || self.microseconds > 0
    }

    /// Days including the weeks component (`weeks * 7 + days`).
    pub fn total_days(&self) -> u64 {
        self.weeks * 7 + self.days
    }

    /// Rolls over-range lower units up into the next coarser unit:
    /// microseconds into seconds, seconds into minutes, minutes into
    /// hours and hours into days. Months and years are never produced by
    /// rollover since their length is not fixed.
    pub fn normalize(mut self) -> Self {
        self.seconds += self.microseconds / 1_000_000;
        self.microseconds %= 1_000_000;
        self.minutes += self.seconds / 60;
        self.seconds %= 60;
        self.hours += self.minutes / 60;
        self.minutes %= 60;
        self.days += self.hours / 24;
        self.hours %= 24;
        self
    }

    /// Emits the ISO-8601 period form (`P1Y2M10DT2H30M`), normalizing
    /// lower units first and folding weeks into days. A zero interval is
    /// emitted as `PT0S`.
    pub fn to_iso_string(&self) -> String {
        let iv = self.normalize();
        if iv.is_zero() {
            return "PT0S".to_string();
        }

        let mut out = String::from("P");
        if iv.years > 0 {
            out.push_str(&format!("{}Y", iv.years));
        }
        if iv.months > 0 {
            out.push_str(&format!("{}M", iv.months));
        }
        if iv.total_days() > 0 {
            out.push_str(&format!("{}D", iv.total_days()));
        }

        // Sub-second remainders are expressed as a fractional second.
        let has_fraction = iv.microseconds > 0;
        if iv.hours > 0 || iv.minutes > 0 || iv.seconds > 0 || has_fraction {
            out.push('T');
            if iv.hours > 0 {
                out.push_str(&format!("{}H", iv.hours));
            }
            if iv.minutes > 0 {
                out.push_str(&format!("{}M", iv.minutes));
            }
            if has_fraction {
                let frac = format!("{:06}", iv.microseconds);
                out.push_str(&format!("{}.{}S", iv.seconds, frac.trim_end_matches('0')));
            } else if iv.seconds > 0 {
                out.push_str(&format!("{}S", iv.seconds));
            }
        }
        out
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_constructors() {
        let iv = Interval::of_years(2).unwrap();
        assert_eq!(iv.years, 2);
        assert!(!iv.has_time());

        let iv = Interval::of_hours(3).unwrap();
        assert!(iv.has_time());
    }

    #[test]
    fn negative_component_rejected() {
        assert_eq!(
            Interval::of_days(-1).unwrap_err(),
            CalendarError::NegativeComponent {
                component: "days",
                value: -1,
            }
        );
    }

    #[test]
    fn chained_setters() {
        let iv = Interval::of_years(1)
            .unwrap()
            .with_months(2)
            .unwrap()
            .with_days(10)
            .unwrap();
        assert_eq!((iv.years, iv.months, iv.days), (1, 2, 10));
    }

    #[test]
    fn normalize_rolls_seconds_into_minutes() {
        let iv = Interval::of_seconds(90).unwrap().normalize();
        assert_eq!(iv.minutes, 1);
        assert_eq!(iv.seconds, 30);
    }

    #[test]
    fn normalize_full_chain() {
        let iv = Interval::of_microseconds(1_500_000)
            .unwrap()
            .with_minutes(130)
            .unwrap()
            .with_hours(25)
            .unwrap()
            .normalize();
        assert_eq!(iv.days, 1);
        assert_eq!(iv.hours, 3);
        assert_eq!(iv.minutes, 10);
        assert_eq!(iv.seconds, 1);
        assert_eq!(iv.microseconds, 500_000);
    }

    #[test]
    fn normalize_never_touches_months() {
        let iv = Interval::of_days(400).unwrap().normalize();
        assert_eq!(iv.days, 400);
        assert_eq!(iv.months, 0);
        assert_eq!(iv.years, 0);
    }

    #[test]
    fn iso_string_basic() {
        let iv = Interval::of_years(1)
            .unwrap()
            .with_months(2)
            .unwrap()
            .with_weeks(1)
            .unwrap()
            .with_days(3)
            .unwrap()
            .with_hours(2)
            .unwrap()
            .with_minutes(30)
            .unwrap();
        assert_eq!(iv.to_iso_string(), "P1Y2M10DT2H30M");
    }

    #[test]
    fn iso_string_rolls_over_range_time() {
        let iv = Interval::of_seconds(90).unwrap();
        assert_eq!(iv.to_iso_string(), "PT1M30S");
    }

    #[test]
    fn iso_string_fractional_seconds() {
        let iv = Interval::of_microseconds(250_000).unwrap();
        assert_eq!(iv.to_iso_string(), "PT0.25S");
    }

    #[test]
    fn iso_string_zero() {
        assert_eq!(Interval::default().to_iso_string(), "PT0S");
    }

    #[test]
    fn display_matches_iso() {
        let iv = Interval::of_days(5).unwrap();
        assert_eq!(iv.to_string(), "P5D");
    }
}
