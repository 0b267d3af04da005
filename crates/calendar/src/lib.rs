//! # kairos-calendar
//!
//! Timezone-free calendar dates and calendar arithmetic.
//!
//! A [`CalendarDate`] is a (year, month, day) triple in the proleptic
//! Gregorian calendar. It carries no time-of-day and no timezone, so it
//! represents the same day everywhere. Month and year arithmetic come in
//! a clamping and an overflow flavor, and a family of navigation methods
//! jumps to period boundaries (week, month, quarter, year, decade,
//! century) and to weekday occurrences within a period.
//!
//! ## Quick Start
//!
//! ```ignore
//! use kairos_calendar::{CalendarDate, Weekday};
//!
//! let d = CalendarDate::new(2012, 1, 31)?;
//! assert_eq!(d.add_months(1)?.to_string(), "2012-02-29");
//! assert_eq!(d.add_months_with_overflow(1)?.to_string(), "2012-03-02");
//! assert_eq!(d.next(Some(Weekday::Mon))?.to_string(), "2012-02-06");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | The `CalendarDate` type and its arithmetic |
//! | `diff` | Component-wise difference between two calendar values |
//! | `interval` | Named-component duration literals |
//! | `week` | Process-wide week boundary configuration |
//! | `error` | Error types |

mod date;
mod diff;
mod error;
mod interval;
mod week;

pub use chrono::Weekday;
pub use date::CalendarDate;
pub use diff::Diff;
pub use error::CalendarError;
pub use interval::Interval;
pub use week::{set_week_ends_at, set_week_starts_at, week_ends_at, week_starts_at};
