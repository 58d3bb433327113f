//! Repeating work/off-day schedules over a closed date period.
//!
//! A [`WorkCycle`] of `(work_days, off_days)` starts its first work phase on
//! the period's first day and repeats until the period's last day. Each day
//! is classified by its offset from the start modulo the cycle length, so
//! month and year boundaries need no special handling.
//!
//! # Quick start
//!
//! ```rust
//! use daywise_schedule::{WorkCycle, work_schedule};
//!
//! let cycle = WorkCycle::new(2, 1);
//! let days = work_schedule("30-12-2024", "03-01-2025", cycle).unwrap();
//! assert_eq!(days, ["30-12-2024", "31-12-2024", "02-01-2025", "03-01-2025"]);
//! ```

pub mod cycle;
pub mod error;
pub mod generate;

pub use cycle::WorkCycle;
pub use error::ScheduleError;
pub use generate::{work_schedule, work_schedule_dates};
