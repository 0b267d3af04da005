//! Component-wise difference between two calendar values.

/// The difference between two dates or instants, broken into calendar
/// and clock components.
///
/// All component fields are magnitudes; [`Diff::inverted`] records the
/// direction (`true` when the second operand precedes the first). The
/// component fields carry the borrow chain of a civil-calendar
/// subtraction, so `days` is the day remainder after whole months were
/// taken out, while [`Diff::total_days`] is the full day count between
/// the two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Diff {
    /// Whole years.
    pub years: i64,
    /// Whole months after years were taken out (0..=11).
    pub months: i64,
    /// Days after whole months were taken out.
    pub days: i64,
    /// Total days between the two values, truncated toward zero.
    pub total_days: i64,
    /// Hours after whole days were taken out (0..=23).
    pub hours: i64,
    /// Minutes after whole hours were taken out (0..=59).
    pub minutes: i64,
    /// Seconds after whole minutes were taken out (0..=59).
    pub seconds: i64,
    /// Microseconds after whole seconds were taken out (0..=999_999).
    pub microseconds: i64,
    /// Whether the second operand came before the first.
    pub inverted: bool,
}

impl Diff {
    /// Whole months including the years component (`years * 12 + months`).
    pub fn total_months(&self) -> i64 {
        self.years * 12 + self.months
    }

    /// Applies a sign to `value` following this diff's direction:
    /// negative when inverted, unchanged otherwise.
    pub fn signed(&self, value: i64) -> i64 {
        if self.inverted {
            -value
        } else {
            value
        }
    }
}
