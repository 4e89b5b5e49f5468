//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{SunError, SunResult};
use crate::logging::LoggingConfig;

use super::types::{ServerSettings, ServiceConfig};

/// Path used when no configuration file is named on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "./config/server.yaml";

/// Loads and provides access to the service configuration.
///
/// # File Format
///
/// ```text
/// server:
///   host: 0.0.0.0
///   port: 8080
///   time_zone: local   # local | utc
/// logging:
///   format: text       # text | json
///   level: info
/// ```
///
/// # Example
///
/// ```no_run
/// use sun_events::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/server.yaml")?;
/// println!("Port: {}", loader.server().port);
/// # Ok::<(), sun_events::error::SunError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML or fields of the wrong type
    pub fn load<P: AsRef<Path>>(path: P) -> SunResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| SunError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = serde_yaml::from_str::<ServiceConfig>(&content).map_err(|e| {
            SunError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            }
        })?;

        Ok(Self { config })
    }

    /// Loads configuration from `path` if the file exists, otherwise
    /// returns the defaults.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> SunResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Returns the HTTP server settings.
    pub fn server(&self) -> &ServerSettings {
        &self.config.server
    }

    /// Returns the logging settings.
    pub fn logging(&self) -> &LoggingConfig {
        &self.config.logging
    }
}
