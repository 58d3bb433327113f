use std::path::Path;

use anyhow::{Context, Result};
use daywise_calendar::{CalendarConfig, CalendarError};
use daywise_schedule::{ScheduleError, WorkCycle};
use serde::Deserialize;

/// Top-level daywise settings, read from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DaywiseConfig {
    /// Wall-clock rendering settings.
    #[serde(default)]
    pub display: DisplayToml,

    /// Default work cycle.
    #[serde(default)]
    pub schedule: ScheduleToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayToml {
    #[serde(default = "default_reference_zone")]
    pub reference_zone: String,
}

impl Default for DisplayToml {
    fn default() -> Self {
        Self {
            reference_zone: default_reference_zone(),
        }
    }
}

fn default_reference_zone() -> String {
    "UTC".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleToml {
    #[serde(default = "default_work_days")]
    pub work_days: u32,
    #[serde(default = "default_off_days")]
    pub off_days: u32,
}

impl Default for ScheduleToml {
    fn default() -> Self {
        Self {
            work_days: default_work_days(),
            off_days: default_off_days(),
        }
    }
}

fn default_work_days() -> u32 {
    5
}
fn default_off_days() -> u32 {
    2
}

impl DaywiseConfig {
    /// Parses settings from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).context("failed to parse TOML config")
    }

    /// Reads and parses settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&toml_str)
    }

    /// Builds the calendar configuration from `[display]`.
    pub fn calendar_config(&self) -> Result<CalendarConfig, CalendarError> {
        CalendarConfig::new().with_reference_zone_name(&self.display.reference_zone)
    }

    /// Builds and validates the work cycle from `[schedule]`.
    pub fn work_cycle(&self) -> Result<WorkCycle, ScheduleError> {
        let cycle = WorkCycle::new(self.schedule.work_days, self.schedule.off_days);
        cycle.validate()?;
        Ok(cycle)
    }
}
