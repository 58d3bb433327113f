//! Integer calendar arithmetic: period lengths, weekend counts, week numbers.

use chrono::Weekday;

use crate::date::CivilDate;
use crate::error::CalendarError;
use crate::input::DateInput;
use crate::month::days_in_month;
use crate::sequence::day_range;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Counts the days in `[start, end]`, both ends included.
///
/// Computed as `floor((end - start) / 1 day) + 1` on the two instants, so
/// equal inputs give 1.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDateString`] if either input fails to parse.
pub fn days_in_period<'a, 'b>(
    start: impl Into<DateInput<'a>>,
    end: impl Into<DateInput<'b>>,
) -> Result<i64, CalendarError> {
    let start = start.into().to_instant()?;
    let end = end.into().to_instant()?;
    let elapsed = (end - start).num_milliseconds();
    Ok(elapsed.div_euclid(MILLIS_PER_DAY) + 1)
}

/// Counts the Saturdays and Sundays in `month` (1..=12) of `year`.
///
/// The result is always between 8 and 10.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn weekend_days_in_month(month: u8, year: i32) -> Result<u8, CalendarError> {
    let last_day = days_in_month(month, year)?;
    let first = CivilDate::new(year, month, 1)?;
    let last = CivilDate::new(year, month, last_day)?;
    let count = day_range(first, last)
        .filter(|d| matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .count();
    Ok(count as u8)
}

/// Returns the week number of a date within its year.
///
/// Week 1 starts on January 1 and every Monday opens a new week. The
/// counter starts at 1 when January 1 is not a Monday (0 otherwise) and is
/// incremented for each Monday from January 1 through the date itself.
/// This is not ISO-8601 week numbering.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDateString`] if the input fails to parse.
///
/// # Examples
///
/// ```
/// use daywise_calendar::week_number;
///
/// assert_eq!(week_number("2024-01-01").unwrap(), 1);
/// assert_eq!(week_number("2024-01-08").unwrap(), 2);
/// ```
pub fn week_number<'a>(date: impl Into<DateInput<'a>>) -> Result<u32, CalendarError> {
    let date = date.into().to_civil()?;
    let jan1 = CivilDate::new(date.year(), 1, 1)?;
    let initial = u32::from(jan1.weekday() != Weekday::Mon);
    let mondays = day_range(jan1, date)
        .filter(|d| d.weekday() == Weekday::Mon)
        .count() as u32;
    Ok(initial + mondays)
}
