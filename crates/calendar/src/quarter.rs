//! Calendar quarter computation.

use crate::error::CalendarError;
use crate::input::DateInput;
use crate::month::validate_month;

/// Returns the quarter (1..=4) that contains `month`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn quarter_of_month(month: u8) -> Result<u8, CalendarError> {
    validate_month(month)?;
    Ok((month - 1) / 3 + 1)
}

/// Returns the quarter (1..=4) of the date's UTC calendar month.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDateString`] if the input fails to parse.
///
/// # Examples
///
/// ```
/// use daywise_calendar::quarter_of_year;
///
/// assert_eq!(quarter_of_year("2024-10-10").unwrap(), 4);
/// ```
pub fn quarter_of_year<'a>(date: impl Into<DateInput<'a>>) -> Result<u8, CalendarError> {
    quarter_of_month(date.into().to_civil()?.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_months() {
        let expected = [1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4];
        for (i, &q) in expected.iter().enumerate() {
            let month = (i + 1) as u8;
            assert_eq!(quarter_of_month(month).unwrap(), q, "month {month}");
        }
    }

    #[test]
    fn invalid_month() {
        assert_eq!(
            quarter_of_month(0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            quarter_of_month(13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn quarter_boundaries() {
        assert_eq!(quarter_of_year("2024-03-31T23:59:59Z").unwrap(), 1);
        assert_eq!(quarter_of_year("2024-04-01").unwrap(), 2);
        assert_eq!(quarter_of_year("2024-09-30").unwrap(), 3);
        assert_eq!(quarter_of_year("2024-10-10").unwrap(), 4);
    }
}
