//! # kairos-human
//!
//! Human-readable rendering of date-time differences.
//!
//! [`DiffFormatter`] turns the difference between two instants or
//! calendar dates into a short phrase (`3 days ago`, `1 month from
//! now`), picking the coarsest unit that reads naturally. All strings
//! come from a pluggable [`Translator`] table, so embedders can swap in
//! their own wording without touching the selection logic.
//!
//! ## Quick Start
//!
//! ```ignore
//! use kairos_human::DiffFormatter;
//! use kairos_instant::Instant;
//!
//! let formatter = DiffFormatter::default();
//! let a = Instant::parse("2024-03-01 12:00:00", None)?;
//! let b = Instant::parse("2024-03-04 12:00:00", None)?;
//! assert_eq!(formatter.diff_for_humans(&a, Some(&b), false), "3 days before");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `formatter` | Unit cascade and tense selection |
//! | `translator` | Pluggable string table |

mod formatter;
mod translator;

pub use formatter::DiffFormatter;
pub use translator::Translator;
