//! Day-by-day walks over civil dates.

use crate::date::CivilDate;

/// Iterator over every civil date from `start` to `end`, both inclusive.
///
/// Yields nothing when `start > end`. Each step produces a fresh
/// [`CivilDate`]; neither endpoint is modified.
#[derive(Debug, Clone)]
pub struct DayRange {
    next: Option<CivilDate>,
    end: CivilDate,
}

impl Iterator for DayRange {
    type Item = CivilDate;

    fn next(&mut self) -> Option<CivilDate> {
        let current = self.next?;
        self.next = if current < self.end {
            current.next().ok()
        } else {
            None
        };
        Some(current)
    }
}

/// Walks every calendar day from `start` through `end`.
///
/// Month and year boundaries are crossed as needed.
///
/// # Example
///
/// ```
/// use daywise_calendar::{CivilDate, day_range};
///
/// let start = CivilDate::new(2024, 12, 30).unwrap();
/// let end = CivilDate::new(2025, 1, 2).unwrap();
/// assert_eq!(day_range(start, end).count(), 4);
/// ```
pub fn day_range(start: CivilDate, end: CivilDate) -> DayRange {
    DayRange {
        next: (start <= end).then_some(start),
        end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u8, day: u8) -> CivilDate {
        CivilDate::new(year, month, day).unwrap()
    }

    #[test]
    fn empty_when_reversed() {
        assert_eq!(day_range(d(2024, 1, 2), d(2024, 1, 1)).count(), 0);
    }

    #[test]
    fn single() {
        let days: Vec<_> = day_range(d(2024, 6, 15), d(2024, 6, 15)).collect();
        assert_eq!(days, vec![d(2024, 6, 15)]);
    }

    #[test]
    fn leap_year_length() {
        assert_eq!(day_range(d(2024, 1, 1), d(2024, 12, 31)).count(), 366);
        assert_eq!(day_range(d(2023, 1, 1), d(2023, 12, 31)).count(), 365);
    }

    #[test]
    fn year_transition() {
        let days: Vec<_> = day_range(d(2000, 12, 30), d(2001, 1, 2)).collect();
        assert_eq!(
            days,
            vec![d(2000, 12, 30), d(2000, 12, 31), d(2001, 1, 1), d(2001, 1, 2)]
        );
    }

    #[test]
    fn feb_29() {
        let days: Vec<_> = day_range(d(2024, 2, 28), d(2024, 3, 1)).collect();
        assert_eq!(days, vec![d(2024, 2, 28), d(2024, 2, 29), d(2024, 3, 1)]);
    }

    #[test]
    fn stops_at_max_date() {
        let last = CivilDate::from(chrono::NaiveDate::MAX);
        let prev = last.previous().unwrap();
        assert_eq!(day_range(prev, last).count(), 2);
    }
}
