//! # daywise
//!
//! Stateless calendar arithmetic and work-schedule generation.
//!
//! This package re-exports the workspace crates and adds the pieces an
//! application needs around them: TOML settings ([`config::DaywiseConfig`])
//! and tracing setup ([`logging::init`]).
//!
//! ```
//! use daywise::{WorkCycle, next_friday, work_schedule};
//!
//! let friday = next_friday("2024-02-03").unwrap();
//! assert_eq!(friday.to_string(), "09-02-2024");
//!
//! let days = work_schedule("01-01-2024", "04-01-2024", WorkCycle::new(1, 1)).unwrap();
//! assert_eq!(days, ["01-01-2024", "03-01-2024"]);
//! ```

pub mod config;
pub mod logging;

pub use daywise_calendar::*;
pub use daywise_schedule::{ScheduleError, WorkCycle, work_schedule, work_schedule_dates};
