//! Repeating work/off-day cycle.

use crate::error::ScheduleError;

/// A repeating pattern of `work_days` on followed by `off_days` off.
///
/// The first work phase begins on the first day of the period.
///
/// # Example
///
/// ```
/// use daywise_schedule::WorkCycle;
///
/// let cycle = WorkCycle::new(4, 3);
/// assert_eq!(cycle.length(), 7);
/// assert!(cycle.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkCycle {
    work_days: u32,
    off_days: u32,
}

impl WorkCycle {
    /// Creates a cycle. Call [`WorkCycle::validate`] before use.
    pub fn new(work_days: u32, off_days: u32) -> Self {
        Self {
            work_days,
            off_days,
        }
    }

    /// Returns the number of consecutive work days.
    pub fn work_days(&self) -> u32 {
        self.work_days
    }

    /// Returns the number of consecutive off days.
    pub fn off_days(&self) -> u32 {
        self.off_days
    }

    /// Returns the full cycle length in days.
    pub fn length(&self) -> u64 {
        u64::from(self.work_days) + u64::from(self.off_days)
    }

    /// Returns `true` if the day `offset` days after the cycle start is a work day.
    pub fn is_work_day(&self, offset: u64) -> bool {
        offset % self.length() < u64::from(self.work_days)
    }

    /// Validates this cycle.
    ///
    /// Both phases must be at least one day long.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.work_days == 0 || self.off_days == 0 {
            return Err(ScheduleError::InvalidCycle {
                work_days: self.work_days,
                off_days: self.off_days,
            });
        }
        Ok(())
    }
}
