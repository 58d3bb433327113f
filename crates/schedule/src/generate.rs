//! Work-schedule generation over a closed period.

use daywise_calendar::{CivilDate, day_range};
use tracing::debug;

use crate::cycle::WorkCycle;
use crate::error::ScheduleError;

/// Returns every work day in `[start, end]` for a repeating cycle.
///
/// Day `start + k` is a work day when `k mod (work_days + off_days)` is
/// below `work_days`. The walk crosses month and year ends as the calendar
/// does.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidCycle`] if either phase is zero and
/// [`ScheduleError::InvalidPeriod`] if `start > end`.
#[tracing::instrument(skip_all, fields(start = %start, end = %end, work_days = cycle.work_days(), off_days = cycle.off_days()))]
pub fn work_schedule_dates(
    start: CivilDate,
    end: CivilDate,
    cycle: WorkCycle,
) -> Result<Vec<CivilDate>, ScheduleError> {
    cycle.validate()?;
    if start > end {
        return Err(ScheduleError::InvalidPeriod { start, end });
    }

    let dates: Vec<CivilDate> = day_range(start, end)
        .zip(0u64..)
        .filter(|&(_, offset)| cycle.is_work_day(offset))
        .map(|(date, _)| date)
        .collect();

    debug!(n_work_days = dates.len(), "schedule generated");
    Ok(dates)
}

/// Returns every work day in `[start, end]` as `DD-MM-YYYY` strings.
///
/// Both endpoints are `DD-MM-YYYY` text. See [`work_schedule_dates`] for the
/// cycle rule.
///
/// # Errors
///
/// Returns [`ScheduleError::Calendar`] if an endpoint fails to parse, plus
/// the errors of [`work_schedule_dates`].
///
/// # Examples
///
/// ```
/// use daywise_schedule::{WorkCycle, work_schedule};
///
/// let days = work_schedule("01-01-2024", "10-01-2024", WorkCycle::new(1, 1)).unwrap();
/// assert_eq!(
///     days,
///     ["01-01-2024", "03-01-2024", "05-01-2024", "07-01-2024", "09-01-2024"]
/// );
/// ```
pub fn work_schedule(
    start: &str,
    end: &str,
    cycle: WorkCycle,
) -> Result<Vec<String>, ScheduleError> {
    let start = CivilDate::parse_dmy(start)?;
    let end = CivilDate::parse_dmy(end)?;
    Ok(work_schedule_dates(start, end, cycle)?
        .into_iter()
        .map(|d| d.to_string())
        .collect())
}
