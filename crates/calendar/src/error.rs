//! Error types for the daywise-calendar crate.

/// Error type for all fallible operations in the daywise-calendar crate.
///
/// Covers unparseable date text, out-of-range month and day values, unknown
/// time zone names, and arithmetic that would leave the representable range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a date string matches none of the accepted formats.
    #[error("invalid date string: {input:?}")]
    InvalidDateString {
        /// The text that failed to parse.
        input: String,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a time zone name is not a known IANA zone.
    #[error("unknown time zone: {name:?}")]
    InvalidTimeZone {
        /// The zone name that was provided.
        name: String,
    },

    /// Returned when date arithmetic steps outside the representable range.
    #[error("date out of representable range")]
    OutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_date_string() {
        let err = CalendarError::InvalidDateString {
            input: "not a date".to_string(),
        };
        assert_eq!(err.to_string(), "invalid date string: \"not a date\"");
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 30,
            month: 2,
            max_day: 29,
        };
        assert_eq!(err.to_string(), "invalid day: 30 for month 2 (max 29)");
    }

    #[test]
    fn error_invalid_time_zone() {
        let err = CalendarError::InvalidTimeZone {
            name: "Mars/Olympus".to_string(),
        };
        assert_eq!(err.to_string(), "unknown time zone: \"Mars/Olympus\"");
    }

    #[test]
    fn error_out_of_range() {
        assert_eq!(
            CalendarError::OutOfRange.to_string(),
            "date out of representable range"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::InvalidMonth { month: 0 };
        let b = CalendarError::InvalidMonth { month: 0 };
        assert_eq!(a, b);

        let c = CalendarError::InvalidMonth { month: 13 };
        assert_ne!(a, c);
    }
}
