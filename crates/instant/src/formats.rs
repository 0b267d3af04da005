//! Named strftime templates and string rendering for [`Instant`].

use chrono::{DateTime, FixedOffset, TimeZone};

use crate::error::InstantError;
use crate::instant::Instant;
use crate::zone::Zone;

/// `2024-03-15`
pub const DATE: &str = "%Y-%m-%d";
/// `10:30:45`
pub const TIME: &str = "%H:%M:%S";
/// `2024-03-15 10:30:45`
pub const DATETIME: &str = "%Y-%m-%d %H:%M:%S";
/// `2024-03-15T10:30:45+00:00`
pub const ATOM: &str = "%Y-%m-%dT%H:%M:%S%:z";
/// Same shape as [`ATOM`].
pub const ISO8601: &str = ATOM;
/// Same shape as [`ATOM`].
pub const RFC3339: &str = ATOM;
/// Same shape as [`ATOM`].
pub const W3C: &str = ATOM;
/// `Friday, 15-Mar-2024 10:30:45 UTC`
pub const COOKIE: &str = "%A, %d-%b-%Y %H:%M:%S %Z";
/// `Fri, 15 Mar 24 10:30:45 +0000`
pub const RFC822: &str = "%a, %d %b %y %H:%M:%S %z";
/// Same shape as [`RFC822`].
pub const RFC1036: &str = RFC822;
/// `Friday, 15-Mar-24 10:30:45 UTC`
pub const RFC850: &str = "%A, %d-%b-%y %H:%M:%S %Z";
/// `Fri, 15 Mar 2024 10:30:45 +0000`
pub const RFC1123: &str = "%a, %d %b %Y %H:%M:%S %z";
/// Same shape as [`RFC1123`].
pub const RFC2822: &str = RFC1123;
/// Same shape as [`RFC1123`].
pub const RSS: &str = RFC1123;

/// Looks a template up by its conventional name (case-insensitive).
pub fn by_name(name: &str) -> Option<&'static str> {
    Some(match name.to_ascii_uppercase().as_str() {
        "DATE" => DATE,
        "TIME" => TIME,
        "DATETIME" => DATETIME,
        "ATOM" => ATOM,
        "ISO8601" => ISO8601,
        "RFC3339" => RFC3339,
        "W3C" => W3C,
        "COOKIE" => COOKIE,
        "RFC822" => RFC822,
        "RFC1036" => RFC1036,
        "RFC850" => RFC850,
        "RFC1123" => RFC1123,
        "RFC2822" => RFC2822,
        "RSS" => RSS,
        _ => return None,
    })
}

impl Instant {
    /// Renders this instant with an strftime pattern. Named zones render
    /// `%Z` as the zone abbreviation; fixed offsets render it as the
    /// offset.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::InvalidFormat`] for a pattern chrono
    /// rejects.
    pub fn format(&self, pattern: &str) -> Result<String, InstantError> {
        use std::fmt::Write as _;

        let mut out = String::new();
        let result = match self.zone() {
            Zone::Named(tz) => {
                write!(out, "{}", tz.from_utc_datetime(&self.utc_naive()).format(pattern))
            }
            Zone::Fixed(offset) => {
                let zoned =
                    DateTime::<FixedOffset>::from_naive_utc_and_offset(self.utc_naive(), offset);
                write!(out, "{}", zoned.format(pattern))
            }
        };
        result.map_err(|_| InstantError::InvalidFormat {
            input: pattern.to_string(),
        })?;
        Ok(out)
    }

    /// `YYYY-MM-DD` in the local zone.
    pub fn to_date_string(&self) -> String {
        self.format(DATE).expect("template is valid")
    }

    /// `HH:MM:SS` in the local zone.
    pub fn to_time_string(&self) -> String {
        self.format(TIME).expect("template is valid")
    }

    /// `YYYY-MM-DD HH:MM:SS` in the local zone.
    pub fn to_datetime_string(&self) -> String {
        self.format(DATETIME).expect("template is valid")
    }

    /// RFC 3339 / ISO-8601 form with the UTC offset.
    pub fn to_iso_string(&self) -> String {
        self.format(ISO8601).expect("template is valid")
    }

    /// RFC 2822 form, the shape used in email headers.
    pub fn to_rfc2822_string(&self) -> String {
        self.format(RFC2822).expect("template is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Instant {
        Instant::create(2024, 3, 15, 10, 30, 45, 0, None).unwrap()
    }

    #[test]
    fn named_templates_render() {
        let i = sample();
        assert_eq!(i.to_date_string(), "2024-03-15");
        assert_eq!(i.to_time_string(), "10:30:45");
        assert_eq!(i.to_datetime_string(), "2024-03-15 10:30:45");
        assert_eq!(i.to_iso_string(), "2024-03-15T10:30:45+00:00");
        assert_eq!(i.to_rfc2822_string(), "Fri, 15 Mar 2024 10:30:45 +0000");
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(by_name("rfc2822"), Some(RFC2822));
        assert_eq!(by_name("DATETIME"), Some(DATETIME));
        assert_eq!(by_name("nonsense"), None);
    }

    #[test]
    fn named_zone_renders_abbreviation() {
        let zone = Zone::parse("Europe/Zurich").unwrap();
        let i = sample().set_timezone(zone);
        assert_eq!(i.format(COOKIE).unwrap(), "Friday, 15-Mar-2024 11:30:45 CET");
    }

    #[test]
    fn custom_pattern() {
        assert_eq!(sample().format("%j/%Y").unwrap(), "075/2024");
    }
}
