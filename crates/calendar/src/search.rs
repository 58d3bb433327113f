//! Forward scans for the next date satisfying a condition.

use chrono::Weekday;
use tracing::debug;

use crate::date::CivilDate;
use crate::error::CalendarError;
use crate::input::DateInput;

/// Walks forward from the day after `from` until `accept` holds.
fn scan_forward(
    from: CivilDate,
    accept: impl Fn(CivilDate) -> bool,
) -> Result<CivilDate, CalendarError> {
    let mut current = from.next()?;
    while !accept(current) {
        current = current.next()?;
    }
    Ok(current)
}

/// Returns the first Friday strictly after the date's UTC day.
///
/// A Friday input yields the Friday one week later.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDateString`] if the input fails to parse
/// and [`CalendarError::OutOfRange`] if the scan runs off the calendar.
///
/// # Examples
///
/// ```
/// use daywise_calendar::{CivilDate, next_friday};
///
/// let friday = next_friday("2024-02-03").unwrap();
/// assert_eq!(friday, CivilDate::new(2024, 2, 9).unwrap());
/// ```
#[tracing::instrument(skip_all)]
pub fn next_friday<'a>(date: impl Into<DateInput<'a>>) -> Result<CivilDate, CalendarError> {
    let from = date.into().to_civil()?;
    let found = scan_forward(from, |d| d.weekday() == Weekday::Fri)?;
    debug!(%from, %found, "next friday");
    Ok(found)
}

/// Returns the first Friday the 13th strictly after the date's UTC day.
///
/// Scans day by day with no upper bound; every year contains at least one
/// Friday the 13th, so the scan is short.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDateString`] if the input fails to parse
/// and [`CalendarError::OutOfRange`] if the scan runs off the calendar.
#[tracing::instrument(skip_all)]
pub fn next_friday_the_13th<'a>(
    date: impl Into<DateInput<'a>>,
) -> Result<CivilDate, CalendarError> {
    let from = date.into().to_civil()?;
    let found = scan_forward(from, |d| d.day() == 13 && d.weekday() == Weekday::Fri)?;
    debug!(%from, %found, "next friday the 13th");
    Ok(found)
}
