//! Configuration for wall-clock rendering.

use chrono_tz::Tz;

use crate::error::CalendarError;

/// Configuration for the operations that render wall-clock time.
///
/// Carries the reference time zone explicitly, so results never depend on
/// the zone or locale of the running process.
///
/// # Example
///
/// ```
/// use daywise_calendar::CalendarConfig;
///
/// let config = CalendarConfig::new()
///     .with_reference_zone_name("Europe/Berlin")
///     .unwrap();
/// assert_eq!(config.reference_zone().name(), "Europe/Berlin");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarConfig {
    reference_zone: Tz,
}

impl CalendarConfig {
    /// Creates a new configuration with the reference zone set to UTC.
    pub fn new() -> Self {
        Self {
            reference_zone: Tz::UTC,
        }
    }

    /// Sets the reference time zone.
    pub fn with_reference_zone(mut self, zone: Tz) -> Self {
        self.reference_zone = zone;
        self
    }

    /// Sets the reference time zone from an IANA name.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTimeZone`] if the name is unknown.
    pub fn with_reference_zone_name(self, name: &str) -> Result<Self, CalendarError> {
        let zone = name
            .parse::<Tz>()
            .map_err(|_| CalendarError::InvalidTimeZone {
                name: name.to_string(),
            })?;
        Ok(self.with_reference_zone(zone))
    }

    /// Returns the reference time zone.
    pub fn reference_zone(&self) -> Tz {
        self.reference_zone
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::new()
    }
}
