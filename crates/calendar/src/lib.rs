//! # daywise-calendar
//!
//! Pure date arithmetic for the proleptic Gregorian calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["DateInput (text / civil / instant)"] -->|".to_instant()"| B["UTC instant"]
//!     A -->|".to_civil()"| C["CivilDate"]
//!     B --> D["timestamp, time of day, display string, period checks"]
//!     C --> E["weekday, leap year, quarter, week number"]
//!     C -->|"day_range()"| F["weekend counts, forward search"]
//! ```
//!
//! Every function is stateless. The two that render wall-clock time take a
//! [`CalendarConfig`] carrying the reference time zone; nothing reads the
//! process zone or locale.
//!
//! ## Quick Start
//!
//! ```
//! use daywise_calendar::{
//!     CalendarConfig, CivilDate, DatePeriod, days_in_month, is_date_in_period, next_friday,
//!     timestamp_from_date,
//! };
//!
//! assert_eq!(timestamp_from_date("01 Jan 1970 00:00:00 UTC").unwrap(), 0);
//! assert_eq!(days_in_month(2, 2024).unwrap(), 29);
//!
//! let period = DatePeriod::new("2024-01-01", "2024-01-31").unwrap();
//! assert!(is_date_in_period("2024-01-31", &period).unwrap());
//!
//! assert_eq!(next_friday("2024-02-16").unwrap(), CivilDate::new(2024, 2, 23).unwrap());
//! # let _ = CalendarConfig::new();
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Civil date value type |
//! | `input` | Accepted input forms and parsing |
//! | `period` | Closed date periods |
//! | `config` | Reference time zone |
//! | `month` | Month lengths and leap years |
//! | `sequence` | Inclusive day walks |
//! | `convert` | Timestamp, time of day, weekday name, display string |
//! | `predicates` | Period membership, leap year |
//! | `count` | Period length, weekend days, week number |
//! | `search` | Next Friday, next Friday the 13th |
//! | `quarter` | Calendar quarter |
//! | `error` | Error types |

mod config;
mod convert;
mod count;
mod date;
mod error;
mod input;
mod month;
mod period;
mod predicates;
mod quarter;
mod search;
mod sequence;

pub use chrono::Weekday;
pub use chrono_tz::Tz;
pub use config::CalendarConfig;
pub use convert::{display_string, time_of_day, timestamp_from_date, weekday_name};
pub use count::{days_in_period, week_number, weekend_days_in_month};
pub use date::CivilDate;
pub use error::CalendarError;
pub use input::DateInput;
pub use month::{days_in_month, is_leap};
pub use period::DatePeriod;
pub use predicates::{is_date_in_period, is_leap_year};
pub use quarter::{quarter_of_month, quarter_of_year};
pub use search::{next_friday, next_friday_the_13th};
pub use sequence::{DayRange, day_range};
