//! Timezone handles: IANA database zones and fixed UTC offsets.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{FixedOffset, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;
use regex::Regex;

use crate::error::InstantError;

/// A timezone an [`crate::Instant`] is anchored in.
///
/// Either a named IANA zone backed by the bundled timezone database,
/// following its daylight-saving rules, or a fixed offset from UTC that
/// never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// An IANA zone such as `Europe/Zurich`.
    Named(Tz),
    /// A fixed offset such as `+05:30`.
    Fixed(FixedOffset),
}

fn offset_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([+-])(\d{2}):?(\d{2})$").expect("offset pattern is valid")
    })
}

impl Zone {
    /// The UTC zone.
    pub const UTC: Zone = Zone::Named(Tz::UTC);

    /// Parses a zone string: a `+HH:MM` / `-HHMM` fixed offset, or an
    /// IANA identifier.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::InvalidZone`] for anything else.
    pub fn parse(name: &str) -> Result<Self, InstantError> {
        let invalid = || InstantError::InvalidZone {
            name: name.to_string(),
        };
        if let Some(caps) = offset_pattern().captures(name) {
            let hours: i32 = caps[2].parse().map_err(|_| invalid())?;
            let minutes: i32 = caps[3].parse().map_err(|_| invalid())?;
            let mut seconds = hours * 3600 + minutes * 60;
            if &caps[1] == "-" {
                seconds = -seconds;
            }
            return FixedOffset::east_opt(seconds).map(Zone::Fixed).ok_or_else(invalid);
        }
        name.parse::<Tz>().map(Zone::Named).map_err(|_| invalid())
    }

    /// The UTC offset in effect at the given UTC wall-clock moment.
    pub fn offset_at_utc(&self, utc: NaiveDateTime) -> FixedOffset {
        match self {
            Zone::Named(tz) => tz.offset_from_utc_datetime(&utc).fix(),
            Zone::Fixed(offset) => *offset,
        }
    }

    /// The UTC offset to attach to the given local wall-clock moment.
    ///
    /// Local times are not always unambiguous under daylight-saving
    /// rules. A repeated wall-clock time (fall-back) resolves to the
    /// earlier of the two offsets; a skipped time (spring-forward) is
    /// interpreted with the offset in force at that moment read as UTC.
    pub fn resolve_local(&self, local: NaiveDateTime) -> FixedOffset {
        match self {
            Zone::Fixed(offset) => *offset,
            Zone::Named(tz) => match tz.offset_from_local_datetime(&local) {
                chrono::LocalResult::Single(offset) => offset.fix(),
                chrono::LocalResult::Ambiguous(earlier, _) => earlier.fix(),
                chrono::LocalResult::None => tz.offset_from_utc_datetime(&local).fix(),
            },
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Named(tz) => write!(f, "{}", tz.name()),
            Zone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

impl FromStr for Zone {
    type Err = InstantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn parse_iana_name() {
        let zone = Zone::parse("Europe/Zurich").unwrap();
        assert_eq!(zone, Zone::Named(Tz::Europe__Zurich));
        assert_eq!(zone.to_string(), "Europe/Zurich");
    }

    #[test]
    fn parse_fixed_offsets() {
        assert_eq!(
            Zone::parse("+05:30").unwrap(),
            Zone::Fixed(FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap())
        );
        assert_eq!(
            Zone::parse("-0800").unwrap(),
            Zone::Fixed(FixedOffset::east_opt(-8 * 3600).unwrap())
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Zone::parse("Mars/Olympus").is_err());
        assert!(Zone::parse("+5:30").is_err());
        assert!(Zone::parse("").is_err());
    }

    #[test]
    fn utc_constant() {
        assert_eq!(Zone::UTC.offset_at_utc(at(2024, 1, 1, 0)).local_minus_utc(), 0);
    }

    #[test]
    fn named_zone_tracks_dst() {
        let zurich = Zone::parse("Europe/Zurich").unwrap();
        assert_eq!(zurich.offset_at_utc(at(2024, 1, 15, 12)).local_minus_utc(), 3600);
        assert_eq!(
            zurich.offset_at_utc(at(2024, 7, 15, 12)).local_minus_utc(),
            7200
        );
    }

    #[test]
    fn ambiguous_local_resolves_to_earlier_offset() {
        // 2024-10-27 02:30 happens twice in Zurich; the pre-transition
        // offset (+02:00) wins.
        let zurich = Zone::parse("Europe/Zurich").unwrap();
        let local = NaiveDate::from_ymd_opt(2024, 10, 27)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        assert_eq!(zurich.resolve_local(local).local_minus_utc(), 7200);
    }

    #[test]
    fn gap_local_still_resolves() {
        // 2024-03-31 02:30 does not exist in Zurich; resolution falls
        // back to the offset in force at that moment read as UTC, which
        // is already the summer offset.
        let zurich = Zone::parse("Europe/Zurich").unwrap();
        let local = NaiveDate::from_ymd_opt(2024, 3, 31)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        assert_eq!(zurich.resolve_local(local).local_minus_utc(), 7200);
    }

    #[test]
    fn fixed_zone_ignores_season() {
        let zone = Zone::parse("+02:00").unwrap();
        assert_eq!(zone.offset_at_utc(at(2024, 1, 15, 12)).local_minus_utc(), 7200);
        assert_eq!(zone.offset_at_utc(at(2024, 7, 15, 12)).local_minus_utc(), 7200);
    }
}
