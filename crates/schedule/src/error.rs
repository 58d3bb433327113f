//! Error types for the daywise-schedule crate.

use daywise_calendar::{CalendarError, CivilDate};

/// Error type for all fallible operations in the daywise-schedule crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    /// Returned when a work cycle has a zero-length phase.
    #[error("invalid work cycle: {work_days} work / {off_days} off (both must be > 0)")]
    InvalidCycle {
        /// Consecutive work days per cycle.
        work_days: u32,
        /// Consecutive off days per cycle.
        off_days: u32,
    },

    /// Returned when the period starts after it ends.
    #[error("invalid period: start {start} is after end {end}")]
    InvalidPeriod {
        /// First day of the period.
        start: CivilDate,
        /// Last day of the period.
        end: CivilDate,
    },

    /// Returned when a period endpoint cannot be parsed or stepped.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_cycle() {
        let e = ScheduleError::InvalidCycle {
            work_days: 0,
            off_days: 2,
        };
        assert_eq!(
            e.to_string(),
            "invalid work cycle: 0 work / 2 off (both must be > 0)"
        );
    }

    #[test]
    fn error_invalid_period() {
        let e = ScheduleError::InvalidPeriod {
            start: CivilDate::new(2024, 2, 1).unwrap(),
            end: CivilDate::new(2024, 1, 1).unwrap(),
        };
        assert_eq!(
            e.to_string(),
            "invalid period: start 01-02-2024 is after end 01-01-2024"
        );
    }

    #[test]
    fn error_from_calendar() {
        let e: ScheduleError = CalendarError::InvalidDateString {
            input: "x".to_string(),
        }
        .into();
        assert_eq!(e.to_string(), "invalid date string: \"x\"");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ScheduleError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ScheduleError>();
    }
}
