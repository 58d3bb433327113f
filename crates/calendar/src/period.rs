//! Closed date periods.

use chrono::{DateTime, Utc};

use crate::error::CalendarError;
use crate::input::DateInput;

/// A closed interval `[start, end]` of instants; both ends are inclusive.
///
/// `start <= end` is not enforced. Callers that need it can check
/// [`DatePeriod::is_ordered`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePeriod {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DatePeriod {
    /// Creates a period from two date inputs.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDateString`] if either end fails to parse.
    pub fn new<'a, 'b>(
        start: impl Into<DateInput<'a>>,
        end: impl Into<DateInput<'b>>,
    ) -> Result<Self, CalendarError> {
        Ok(Self {
            start: start.into().to_instant()?,
            end: end.into().to_instant()?,
        })
    }

    /// Returns the start instant.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the end instant.
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns `true` if `start <= end`.
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Returns `true` if `instant` lies within the period, ends included.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive() {
        let period = DatePeriod::new("2024-01-01", "2024-01-31").unwrap();
        assert!(period.contains(period.start()));
        assert!(period.contains(period.end()));
    }

    #[test]
    fn contains_outside() {
        let period = DatePeriod::new("2024-01-01", "2024-01-31").unwrap();
        let before = DateInput::Text("2023-12-31T23:59:59Z").to_instant().unwrap();
        let after = DateInput::Text("2024-01-31T00:00:01Z").to_instant().unwrap();
        assert!(!period.contains(before));
        assert!(!period.contains(after));
    }

    #[test]
    fn reversed_period_contains_nothing() {
        let period = DatePeriod::new("2024-02-01", "2024-01-01").unwrap();
        assert!(!period.is_ordered());
        let mid = DateInput::Text("2024-01-15").to_instant().unwrap();
        assert!(!period.contains(mid));
    }

    #[test]
    fn invalid_end() {
        assert!(matches!(
            DatePeriod::new("2024-01-01", "later"),
            Err(CalendarError::InvalidDateString { .. })
        ));
    }
}
