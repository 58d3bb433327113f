//! Map a date to a derived scalar or display string.

use chrono::Weekday;

use crate::config::CalendarConfig;
use crate::error::CalendarError;
use crate::input::DateInput;

/// Returns the milliseconds since the Unix epoch for a date.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDateString`] if the input fails to parse.
///
/// # Examples
///
/// ```
/// use daywise_calendar::timestamp_from_date;
///
/// assert_eq!(timestamp_from_date("01 Jan 1970 00:00:00 UTC").unwrap(), 0);
/// ```
pub fn timestamp_from_date<'a>(date: impl Into<DateInput<'a>>) -> Result<i64, CalendarError> {
    Ok(date.into().to_instant()?.timestamp_millis())
}

/// Returns the wall-clock time as `HH:MM:SS` (24-hour, zero padded) in the
/// configured reference zone.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDateString`] if the input fails to parse.
pub fn time_of_day<'a>(
    date: impl Into<DateInput<'a>>,
    config: &CalendarConfig,
) -> Result<String, CalendarError> {
    let instant = date.into().to_instant()?;
    Ok(instant
        .with_timezone(&config.reference_zone())
        .format("%H:%M:%S")
        .to_string())
}

/// Returns the full English weekday name of the date's UTC day.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDateString`] if the input fails to parse.
pub fn weekday_name<'a>(date: impl Into<DateInput<'a>>) -> Result<&'static str, CalendarError> {
    let weekday = date.into().to_civil()?.weekday();
    Ok(match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    })
}

/// Renders `M/D/YYYY, h:mm:ss AM|PM` in the configured reference zone.
///
/// The output depends only on the input and `config`, never on the zone of
/// the running process.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDateString`] if the input fails to parse.
///
/// # Examples
///
/// ```
/// use daywise_calendar::{CalendarConfig, display_string};
///
/// let config = CalendarConfig::new();
/// assert_eq!(
///     display_string("2024-03-05T14:07:09Z", &config).unwrap(),
///     "3/5/2024, 2:07:09 PM"
/// );
/// ```
pub fn display_string<'a>(
    date: impl Into<DateInput<'a>>,
    config: &CalendarConfig,
) -> Result<String, CalendarError> {
    let instant = date.into().to_instant()?;
    Ok(instant
        .with_timezone(&config.reference_zone())
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string())
}
