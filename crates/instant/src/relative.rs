//! Relative date-time expression engine.
//!
//! Interprets human-oriented modifiers like `+3 days`, `next tuesday` or
//! `first day of next month` against a base instant. Clauses are applied
//! left to right, separated by commas, and every clause preserves the
//! time-of-day unless it names a time of day itself (`midnight`,
//! `today`, `noon`).

use std::sync::OnceLock;

use kairos_calendar::Weekday;
use regex::Regex;

use crate::error::InstantError;
use crate::instant::Instant;

struct Patterns {
    /// A word that marks the input as relative rather than literal.
    keyword: Regex,
    /// A literal `YYYY-M-D` date anywhere in the input, which overrides
    /// keyword detection.
    iso_date: Regex,
    /// A bare time-of-day.
    time_only: Regex,
    /// Signed count plus unit, optional trailing `ago`.
    offset: Regex,
    /// `next`/`last`/`this` plus a weekday or period name.
    navigate: Regex,
    /// `first day of` / `last day of` plus a month reference.
    boundary: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        keyword: Regex::new(r"(?i)\b(this|next|last|tomorrow|yesterday|midnight|noon|today|now|first|ago)\b|[+-]")
            .expect("keyword pattern is valid"),
        iso_date: Regex::new(r"\d{4}-\d{1,2}-\d{1,2}").expect("iso date pattern is valid"),
        time_only: Regex::new(r"^\s*\d{1,2}[:.]\d{1,2}(?:[:.]\d{1,2}(?:\.\d+)?)?\s*$")
            .expect("time pattern is valid"),
        offset: Regex::new(
            r"(?i)^([+-]?)(\d+)\s*(years?|months?|weekdays?|weeks?|days?|hours?|minutes?|mins?|microseconds?|seconds?|secs?)(\s+ago)?$",
        )
        .expect("offset pattern is valid"),
        navigate: Regex::new(r"(?i)^(next|last|this)\s+([a-z]+)$")
            .expect("navigation pattern is valid"),
        boundary: Regex::new(r"(?i)^(first|last)\s+day\s+of\s+(.+)$")
            .expect("boundary pattern is valid"),
    })
}

/// Whether the input should be routed through the modifier engine
/// instead of literal parsing. A literal date anywhere in the string
/// disables the routing even when keywords are present.
pub(crate) fn has_relative_keywords(input: &str) -> bool {
    let p = patterns();
    p.keyword.is_match(input) && !p.iso_date.is_match(input)
}

/// Whether the input is a bare time-of-day with no date part.
pub(crate) fn is_time_only(input: &str) -> bool {
    patterns().time_only.is_match(input)
}

/// Applies a relative expression to `base`, clause by clause.
pub(crate) fn apply(base: Instant, expr: &str) -> Result<Instant, InstantError> {
    let mut current = base;
    for clause in expr.split(',') {
        let clause = clause.trim();
        if clause.is_empty() {
            continue;
        }
        current = apply_clause(current, clause)?;
    }
    Ok(current)
}

fn apply_clause(base: Instant, clause: &str) -> Result<Instant, InstantError> {
    let p = patterns();
    let lower = clause.to_lowercase();

    match lower.as_str() {
        "now" => return Ok(base),
        "today" | "midnight" => return Ok(base.start_of_day()),
        "noon" => return Ok(base.noon()),
        "tomorrow" => return base.add_days(1).map(Instant::start_of_day),
        "yesterday" => return base.sub_days(1).map(Instant::start_of_day),
        _ => {}
    }

    if let Some(caps) = p.offset.captures(clause) {
        return apply_offset(base, clause, &caps);
    }
    if let Some(caps) = p.navigate.captures(clause) {
        return apply_navigation(base, clause, &caps[1], &caps[2]);
    }
    if let Some(caps) = p.boundary.captures(clause) {
        return apply_boundary(base, clause, &caps[1], &caps[2]);
    }

    Err(InstantError::InvalidModifier {
        modifier: clause.to_string(),
    })
}

fn apply_offset(
    base: Instant,
    clause: &str,
    caps: &regex::Captures<'_>,
) -> Result<Instant, InstantError> {
    let count: i64 = caps[2].parse().map_err(|_| InstantError::InvalidModifier {
        modifier: clause.to_string(),
    })?;
    // A leading minus and a trailing "ago" each flip the direction.
    let mut count = count;
    if &caps[1] == "-" {
        count = -count;
    }
    if caps.get(4).is_some() {
        count = -count;
    }

    let unit = caps[3].to_lowercase();
    match unit.trim_end_matches('s') {
        "year" => base.add_years_with_overflow(int32(count, clause)?),
        "month" => base.add_months_with_overflow(int32(count, clause)?),
        "week" => base.add_weeks(count),
        "weekday" => base.add_weekdays(count),
        "day" => base.add_days(count),
        "hour" => base.add_hours(count),
        "minute" | "min" => base.add_minutes(count),
        "second" | "sec" => base.add_seconds(count),
        "microsecond" => base.add_microseconds(count),
        _ => Err(InstantError::InvalidModifier {
            modifier: clause.to_string(),
        }),
    }
}

fn apply_navigation(
    base: Instant,
    clause: &str,
    direction: &str,
    target: &str,
) -> Result<Instant, InstantError> {
    let direction = direction.to_lowercase();
    let target = target.to_lowercase();

    match target.as_str() {
        "week" => {
            return match direction.as_str() {
                "next" => base.add_weeks(1),
                "last" => base.add_weeks(-1),
                _ => Ok(base),
            }
        }
        "month" => {
            return match direction.as_str() {
                "next" => base.add_months_with_overflow(1),
                "last" => base.add_months_with_overflow(-1),
                _ => Ok(base),
            }
        }
        "year" => {
            return match direction.as_str() {
                "next" => base.add_years_with_overflow(1),
                "last" => base.add_years_with_overflow(-1),
                _ => Ok(base),
            }
        }
        _ => {}
    }

    let weekday: Weekday = target.parse().map_err(|_| InstantError::InvalidModifier {
        modifier: clause.to_string(),
    })?;
    match direction.as_str() {
        "next" => base.next(Some(weekday)),
        "last" => base.previous(Some(weekday)),
        // "this tuesday": the nearest such weekday not in the past.
        _ => {
            if base.day_of_week() == weekday {
                Ok(base)
            } else {
                base.next(Some(weekday))
            }
        }
    }
}

fn apply_boundary(
    base: Instant,
    clause: &str,
    edge: &str,
    target: &str,
) -> Result<Instant, InstantError> {
    let anchor = match target.to_lowercase().as_str() {
        "this month" => base,
        "next month" => base.set_day(1)?.add_months(1)?,
        "last month" | "previous month" => base.set_day(1)?.sub_months(1)?,
        other => month_reference(base, clause, other)?,
    };
    if edge.eq_ignore_ascii_case("first") {
        anchor.set_day(1)
    } else {
        anchor.set_day(anchor.date().days_in_month())
    }
}

/// Resolves `<monthname> [year]` to an instant in that month.
fn month_reference(base: Instant, clause: &str, target: &str) -> Result<Instant, InstantError> {
    let invalid = || InstantError::InvalidModifier {
        modifier: clause.to_string(),
    };
    let mut words = target.split_whitespace();
    let month = match words.next().ok_or_else(invalid)? {
        "january" | "jan" => 1,
        "february" | "feb" => 2,
        "march" | "mar" => 3,
        "april" | "apr" => 4,
        "may" => 5,
        "june" | "jun" => 6,
        "july" | "jul" => 7,
        "august" | "aug" => 8,
        "september" | "sep" => 9,
        "october" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return Err(invalid()),
    };
    let year = match words.next() {
        Some(word) => word.parse::<i32>().map_err(|_| invalid())?,
        None => base.year(),
    };
    if words.next().is_some() {
        return Err(invalid());
    }
    base.set_day(1)?.set_year(year)?.set_month(month)
}

fn int32(value: i64, clause: &str) -> Result<i32, InstantError> {
    i32::try_from(value).map_err(|_| InstantError::InvalidModifier {
        modifier: clause.to_string(),
    })
}
