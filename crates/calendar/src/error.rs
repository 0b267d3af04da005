//! Error types for the kairos-calendar crate.

/// Error type for all fallible operations in the kairos-calendar crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when (year, month, day) does not name a real calendar day.
    #[error("invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// The requested year.
        year: i32,
        /// The requested month.
        month: u32,
        /// The requested day.
        day: u32,
    },

    /// Returned when a date string does not match the `YYYY-MM-DD` form.
    #[error("date string is not in expected format \"YYYY-MM-DD\": {input:?}")]
    InvalidFormat {
        /// The rejected input string.
        input: String,
    },

    /// Returned when arithmetic leaves the range the platform calendar
    /// can represent.
    #[error("date arithmetic overflowed the supported year range")]
    OutOfRange,

    /// Returned when an interval carrying hour, minute, second or
    /// microsecond components is applied to a date-only value.
    #[error("interval with time-of-day components applied to a calendar date")]
    TimeComponentsOnDate,

    /// Returned when an interval component is built from a negative count.
    /// Intervals are magnitudes; direction comes from the operation.
    #[error("interval components must not be negative: {component} = {value}")]
    NegativeComponent {
        /// Name of the offending component.
        component: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// Returned when a zero-length interval is used to step through a
    /// period walk, which would never terminate.
    #[error("cannot step through a period with an empty interval")]
    EmptyInterval,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_date() {
        let err = CalendarError::InvalidDate {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(err.to_string(), "invalid calendar date: 2023-02-29");
    }

    #[test]
    fn error_negative_component() {
        let err = CalendarError::NegativeComponent {
            component: "days",
            value: -3,
        };
        assert_eq!(
            err.to_string(),
            "interval components must not be negative: days = -3"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
