//! # kairos-instant
//!
//! Timezone-aware instants with relative expressions and a test clock.
//!
//! An [`Instant`] is an absolute point in time viewed through a [`Zone`]
//! (an IANA zone or a fixed offset). It lifts the calendar arithmetic of
//! [`kairos_calendar::CalendarDate`] to date-times with the time-of-day
//! preserved, adds absolute-timeline clock arithmetic, flexible string
//! parsing including relative expressions (`+2 days`, `next tuesday`),
//! and a process-wide [`TestClock`] override for deterministic tests.
//!
//! ## Quick Start
//!
//! ```ignore
//! use kairos_instant::{Instant, TestClock, Zone};
//!
//! TestClock::set_from_str("2013-09-01 05:15:05")?;
//! let i = Instant::parse("+1 day", None)?;
//! assert_eq!(i.to_datetime_string(), "2013-09-02 05:15:05");
//! TestClock::clear();
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `instant` | The `Instant` type: construction, arithmetic, diffs |
//! | `zone` | IANA and fixed-offset timezone handles |
//! | `relative` | Relative date-time expression engine |
//! | `formats` | Named strftime templates and string rendering |
//! | `test_clock` | Process-wide frozen clock |
//! | `error` | Error types |

mod error;
pub mod formats;
mod instant;
mod relative;
mod test_clock;
mod zone;

pub use error::InstantError;
pub use instant::Instant;
pub use test_clock::TestClock;
pub use zone::Zone;
