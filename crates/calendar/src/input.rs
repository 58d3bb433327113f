//! Accepted date inputs and their normalisation to a UTC instant.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::date::CivilDate;
use crate::error::CalendarError;

/// Naive date-time layouts, read as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M",
];

/// Date-only layouts, read as midnight UTC.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d %b %Y"];

/// Offset-carrying ISO layouts that RFC 3339 rejects (no seconds, `+hhmm`).
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M%#z",
];

/// A date argument in any of the accepted representations.
///
/// Every operation normalises its argument once, through
/// [`DateInput::to_instant`], before doing any arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    /// Date text: ISO-8601 (optional time and offset), or
    /// `DD MMM YYYY HH:mm:ss zzz`.
    Text(&'a str),
    /// A civil date, taken as midnight UTC.
    Civil(CivilDate),
    /// An instant on the UTC timeline.
    Instant(DateTime<Utc>),
}

impl DateInput<'_> {
    /// Normalises this input to a UTC instant.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDateString`] if text input matches
    /// none of the accepted formats.
    pub fn to_instant(&self) -> Result<DateTime<Utc>, CalendarError> {
        match *self {
            DateInput::Text(text) => parse_instant(text),
            DateInput::Civil(date) => Ok(date.midnight_utc()),
            DateInput::Instant(instant) => Ok(instant),
        }
    }

    /// Normalises this input to the civil date of its UTC instant.
    ///
    /// # Errors
    ///
    /// Same as [`DateInput::to_instant`].
    pub fn to_civil(&self) -> Result<CivilDate, CalendarError> {
        match *self {
            DateInput::Civil(date) => Ok(date),
            _ => Ok(CivilDate::from(self.to_instant()?.date_naive())),
        }
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        DateInput::Text(text)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(text: &'a String) -> Self {
        DateInput::Text(text.as_str())
    }
}

impl From<CivilDate> for DateInput<'_> {
    fn from(date: CivilDate) -> Self {
        DateInput::Civil(date)
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(date: NaiveDate) -> Self {
        DateInput::Civil(CivilDate::from(date))
    }
}

impl From<DateTime<Utc>> for DateInput<'_> {
    fn from(instant: DateTime<Utc>) -> Self {
        DateInput::Instant(instant)
    }
}

/// Parses date text into a UTC instant.
///
/// Tried in order: RFC 3339, RFC 2822 (with `UTC` in any case accepted as a
/// zone), ISO with an offset RFC 3339 rejects (no seconds, `+hhmm`, or a
/// `Z` after the minutes), naive date-times, then bare dates.
pub(crate) fn parse_instant(text: &str) -> Result<DateTime<Utc>, CalendarError> {
    let s = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(&rfc2822_zone(s)) {
        return Ok(dt.with_timezone(&Utc));
    }
    let zoned = utc_designator(s);
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&zoned, fmt) {
            return Ok(dt.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ndt.and_utc());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(CivilDate::from(date).midnight_utc());
        }
    }

    Err(CalendarError::InvalidDateString {
        input: text.to_string(),
    })
}

/// RFC 2822 has no `UTC` zone name; rewrite a trailing one as `+0000`.
fn rfc2822_zone(s: &str) -> String {
    match s.len().checked_sub(4).and_then(|i| s.split_at_checked(i)) {
        Some((head, tail)) if tail.eq_ignore_ascii_case(" utc") => format!("{head} +0000"),
        _ => s.to_string(),
    }
}

/// Rewrites a trailing `Z`/`z` designator as `+00:00`.
fn utc_designator(s: &str) -> String {
    match s.strip_suffix(['Z', 'z']) {
        Some(head) => format!("{head}+00:00"),
        None => s.to_string(),
    }
}
