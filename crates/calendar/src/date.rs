//! Civil date in the proleptic Gregorian calendar.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};

use crate::error::CalendarError;
use crate::month::{days_in_month, is_leap};

/// A year/month/day triple with no time of day.
///
/// Values are immutable; stepping with [`CivilDate::next`] or
/// [`CivilDate::previous`] returns a new date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate(NaiveDate);

impl CivilDate {
    /// Creates a new `CivilDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] or [`CalendarError::InvalidDay`]
    /// if the month or day is invalid for that year, and
    /// [`CalendarError::OutOfRange`] if the year cannot be represented.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(month, year)?;
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        NaiveDate::from_ymd_opt(year, month as u32, day as u32)
            .map(Self)
            .ok_or(CalendarError::OutOfRange)
    }

    /// Parses a `DD-MM-YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDateString`] if the text is not a valid
    /// day-month-year date.
    pub fn parse_dmy(text: &str) -> Result<Self, CalendarError> {
        NaiveDate::parse_from_str(text.trim(), "%d-%m-%Y")
            .map(Self)
            .map_err(|_| CalendarError::InvalidDateString {
                input: text.to_string(),
            })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.0.month() as u8
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.0.day() as u8
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Returns `true` if this date falls in a leap year.
    pub fn is_leap_year(self) -> bool {
        is_leap(self.year())
    }

    /// Returns the next calendar day, rolling over month and year ends.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] past the last representable date.
    pub fn next(self) -> Result<Self, CalendarError> {
        self.0.succ_opt().map(Self).ok_or(CalendarError::OutOfRange)
    }

    /// Returns the previous calendar day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] before the first representable date.
    pub fn previous(self) -> Result<Self, CalendarError> {
        self.0.pred_opt().map(Self).ok_or(CalendarError::OutOfRange)
    }

    /// Number of days from `self` to `other` (negative if `other` is earlier).
    pub fn days_until(self, other: Self) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    /// Returns the instant at midnight UTC on this date.
    pub fn midnight_utc(self) -> DateTime<Utc> {
        self.0.and_time(chrono::NaiveTime::MIN).and_utc()
    }
}

impl From<NaiveDate> for CivilDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// Formats as `DD-MM-YYYY`.
impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}-{:02}-{:04}",
            self.day(),
            self.month(),
            self.year()
        )
    }
}
