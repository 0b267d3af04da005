//! # kairos-clock
//!
//! Immutable wall-clock time-of-day values.
//!
//! A [`Time`] is a point within a single day, stored as microsecond ticks
//! since midnight. It carries no date and no timezone: `06:30` is the same
//! value everywhere and on every day.
//!
//! ## Quick Start
//!
//! ```ignore
//! use kairos_clock::Time;
//!
//! let t = Time::parse("10:30:45.5")?;
//! assert_eq!(t.hours(), 10);
//!
//! // Setters wrap with a floor-modulo instead of failing.
//! assert_eq!(t.set_hours(-1).hours(), 23);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `time` | Tick-based time-of-day newtype |
//! | `error` | Error types |

mod error;
mod time;

pub use error::ClockError;
pub use time::{
    Time, TICKS_PER_DAY, TICKS_PER_HOUR, TICKS_PER_MICROSECOND, TICKS_PER_MINUTE, TICKS_PER_SECOND,
};
