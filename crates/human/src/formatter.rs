//! Human-readable difference rendering.

use kairos_calendar::{CalendarDate, Diff};
use kairos_instant::Instant;

use crate::translator::Translator;

/// Renders the difference between two instants or dates as a short
/// human phrase (`3 days ago`, `1 month from now`, `2 hours before`).
///
/// The unit is picked by a coarseness cascade: whole years if at least
/// one, months if at least two, weeks from 21 days up, then days, hours,
/// minutes and finally seconds. A zero count renders as 1, so a
/// sub-second difference still reads `1 second ago` rather than an
/// awkward zero.
///
/// Tense depends on whether an explicit comparison point was given:
/// against "now" the phrases are `ago`/`from now`, against another value
/// they are `before`/`after`.
#[derive(Debug, Clone, Default)]
pub struct DiffFormatter {
    translator: Translator,
}

impl DiffFormatter {
    /// A formatter with a caller-supplied string table.
    pub fn new(translator: Translator) -> Self {
        Self { translator }
    }

    /// The string table in use.
    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Renders the difference between `instant` and `other` (default:
    /// now). With `absolute` the bare quantity is returned, no tense.
    pub fn diff_for_humans(
        &self,
        instant: &Instant,
        other: Option<&Instant>,
        absolute: bool,
    ) -> String {
        let is_now = other.is_none();
        let reference = match other {
            Some(other) => *other,
            None => Instant::now(None),
        };
        self.render(&instant.diff(&reference), is_now, absolute)
    }

    /// Renders the difference between `date` and `other` (default:
    /// today). Calendar dates never produce sub-day units.
    pub fn date_diff_for_humans(
        &self,
        date: &CalendarDate,
        other: Option<&CalendarDate>,
        absolute: bool,
    ) -> String {
        let is_now = other.is_none();
        let reference = match other {
            Some(other) => *other,
            None => Instant::now(None).date(),
        };
        self.render(&date.diff(&reference), is_now, absolute)
    }

    fn render(&self, diff: &Diff, is_now: bool, absolute: bool) -> String {
        let (unit, count) = pick_unit(diff);
        let count = if count == 0 { 1 } else { count };
        let time = self.translator.plural(unit, count, &[]);
        if absolute {
            return time;
        }

        // `inverted` means the comparison point precedes the value, i.e.
        // the value lies in the future relative to it.
        let tense = match (is_now, diff.inverted) {
            (true, true) => "from_now",
            (true, false) => "ago",
            (false, true) => "after",
            (false, false) => "before",
        };

        // Some tables carry specialized unit-and-tense entries.
        let override_key = format!("{unit}_{tense}");
        if self.translator.exists(&override_key) {
            return self.translator.plural(&override_key, count, &[]);
        }
        self.translator.singular(tense, &[("time", &time)])
    }
}

fn pick_unit(diff: &Diff) -> (&'static str, i64) {
    if diff.years >= 1 {
        ("year", diff.years)
    } else if diff.months >= 2 {
        ("month", diff.total_months())
    } else if diff.total_days >= 21 {
        ("week", diff.total_days / 7)
    } else if diff.total_days >= 1 {
        ("day", diff.total_days)
    } else if diff.hours >= 1 {
        ("hour", diff.hours)
    } else if diff.minutes >= 1 {
        ("minute", diff.minutes)
    } else {
        ("second", diff.seconds)
    }
}
