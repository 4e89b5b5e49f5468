//! Configuration types for the sun events service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so a partial file is valid.

use chrono::{DateTime, Local, Utc};
use serde::Deserialize;

use crate::logging::LoggingConfig;

/// Time zone used when rendering computed event times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeZoneSetting {
    /// The host's local time zone.
    #[default]
    Local,
    /// Coordinated Universal Time.
    Utc,
}

impl TimeZoneSetting {
    /// Renders an instant as `YYYY-MM-DD HH:MM:SS ±HH:MM` in this time zone.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use sun_events::config::TimeZoneSetting;
    ///
    /// let instant = Utc.with_ymd_and_hms(2024, 6, 21, 4, 43, 9).unwrap();
    /// assert_eq!(TimeZoneSetting::Utc.render(instant), "2024-06-21 04:43:09 +00:00");
    /// ```
    pub fn render(&self, instant: DateTime<Utc>) -> String {
        const FORMAT: &str = "%Y-%m-%d %H:%M:%S %:z";
        match self {
            TimeZoneSetting::Local => instant.with_timezone(&Local).format(FORMAT).to_string(),
            TimeZoneSetting::Utc => instant.format(FORMAT).to_string(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// The host address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
    /// Time zone for rendered event times.
    pub time_zone: TimeZoneSetting,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            time_zone: TimeZoneSetting::Local,
        }
    }
}

impl ServerSettings {
    /// Returns the `host:port` string to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Logging settings.
    pub logging: LoggingConfig,
}
