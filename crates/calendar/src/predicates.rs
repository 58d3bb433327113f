//! Boolean classification of dates.

use crate::error::CalendarError;
use crate::input::DateInput;
use crate::period::DatePeriod;

/// Returns `true` if `period.start <= date <= period.end`, comparing instants.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDateString`] if the input fails to parse.
pub fn is_date_in_period<'a>(
    date: impl Into<DateInput<'a>>,
    period: &DatePeriod,
) -> Result<bool, CalendarError> {
    Ok(period.contains(date.into().to_instant()?))
}

/// Returns `true` if the date's UTC year is a Gregorian leap year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDateString`] if the input fails to parse.
pub fn is_leap_year<'a>(date: impl Into<DateInput<'a>>) -> Result<bool, CalendarError> {
    Ok(date.into().to_civil()?.is_leap_year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::CivilDate;

    #[test]
    fn in_period_bounds() {
        let period = DatePeriod::new("2024-01-01", "2024-01-31").unwrap();
        assert!(is_date_in_period("2024-01-01", &period).unwrap());
        assert!(is_date_in_period("2024-01-15T12:00:00Z", &period).unwrap());
        assert!(is_date_in_period("2024-01-31", &period).unwrap());
        assert!(!is_date_in_period("2024-02-01", &period).unwrap());
        assert!(!is_date_in_period("2023-12-31", &period).unwrap());
    }

    #[test]
    fn in_period_invalid_date() {
        let period = DatePeriod::new("2024-01-01", "2024-01-31").unwrap();
        assert!(is_date_in_period("soon", &period).is_err());
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year("2000-06-01").unwrap());
        assert!(!is_leap_year("1900-06-01").unwrap());
        assert!(is_leap_year("2024-01-01").unwrap());
        assert!(!is_leap_year(CivilDate::new(2023, 5, 5).unwrap()).unwrap());
    }
}
