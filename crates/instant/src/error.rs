//! Error types for the kairos-instant crate.

use kairos_calendar::CalendarError;
use kairos_clock::ClockError;

/// Error type for all fallible operations in the kairos-instant crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstantError {
    /// Returned when an input string matches none of the accepted
    /// date-time forms.
    #[error("could not interpret {input:?} as a date-time")]
    InvalidFormat {
        /// The rejected input string.
        input: String,
    },

    /// Returned when a relative expression contains a clause the
    /// modifier grammar does not know.
    #[error("unrecognized date-time modifier: {modifier:?}")]
    InvalidModifier {
        /// The offending clause.
        modifier: String,
    },

    /// Returned when a timezone name is neither an IANA identifier nor a
    /// fixed `+HH:MM` offset.
    #[error("unknown timezone: {name:?}")]
    InvalidZone {
        /// The rejected zone string.
        name: String,
    },

    /// Returned by field lookup for a property name outside the known set.
    #[error("unknown date-time property: {name:?}")]
    UnknownProperty {
        /// The requested property name.
        name: String,
    },

    /// Returned when arithmetic leaves the range the platform calendar
    /// can represent.
    #[error("date-time arithmetic overflowed the supported range")]
    OutOfRange,

    /// A calendar-level failure surfaced through a lifted date operation.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// A time-of-day parse failure surfaced through instant parsing.
    #[error(transparent)]
    Clock(#[from] ClockError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_zone() {
        let err = InstantError::InvalidZone {
            name: "Mars/Olympus".to_string(),
        };
        assert_eq!(err.to_string(), "unknown timezone: \"Mars/Olympus\"");
    }

    #[test]
    fn calendar_errors_convert() {
        let err: InstantError = CalendarError::OutOfRange.into();
        assert_eq!(err, InstantError::Calendar(CalendarError::OutOfRange));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<InstantError>();
    }
}
