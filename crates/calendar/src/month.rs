//! Month lengths and leap-year rules for the proleptic Gregorian calendar.

use crate::error::CalendarError;

/// Number of days in each month of a common year (index 0 unused, index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year` is a Gregorian leap year.
///
/// A year is a leap year when it is divisible by 4 and either not divisible
/// by 100 or divisible by 400.
pub fn is_leap(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` (1..=12) of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
///
/// # Examples
///
/// ```
/// use daywise_calendar::days_in_month;
///
/// assert_eq!(days_in_month(2, 2024).unwrap(), 29);
/// assert_eq!(days_in_month(2, 2023).unwrap(), 28);
/// ```
pub fn days_in_month(month: u8, year: i32) -> Result<u8, CalendarError> {
    validate_month(month)?;
    if month == 2 && is_leap(year) {
        Ok(29)
    } else {
        Ok(DAYS_PER_MONTH[month as usize])
    }
}

pub(crate) fn validate_month(month: u8) -> Result<(), CalendarError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(CalendarError::InvalidMonth { month })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sums_to_365() {
        let total: u16 = DAYS_PER_MONTH.iter().map(|&d| d as u16).sum();
        assert_eq!(total, 365);
    }

    #[test]
    fn leap_rule() {
        assert!(is_leap(2000));
        assert!(!is_leap(1900));
        assert!(is_leap(2024));
        assert!(!is_leap(2023));
        assert!(!is_leap(2100));
        assert!(is_leap(0));
        assert!(is_leap(-4));
    }

    #[test]
    fn february() {
        assert_eq!(days_in_month(2, 2024).unwrap(), 29);
        assert_eq!(days_in_month(2, 2023).unwrap(), 28);
        assert_eq!(days_in_month(2, 2000).unwrap(), 29);
        assert_eq!(days_in_month(2, 1900).unwrap(), 28);
    }

    #[test]
    fn other_months_ignore_year() {
        for month in (1..=12u8).filter(|&m| m != 2) {
            assert_eq!(
                days_in_month(month, 2023).unwrap(),
                days_in_month(month, 2024).unwrap(),
                "month {month} differs between 2023 and 2024"
            );
        }
        assert_eq!(days_in_month(1, 2024).unwrap(), 31);
        assert_eq!(days_in_month(4, 2024).unwrap(), 30);
        assert_eq!(days_in_month(12, 2024).unwrap(), 31);
    }

    #[test]
    fn invalid_month() {
        assert_eq!(
            days_in_month(0, 2024).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            days_in_month(13, 2024).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }
}
