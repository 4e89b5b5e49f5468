//! Configuration loading for the sun events service.
//!
//! This module loads the service configuration (bind address, display time
//! zone and logging) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use sun_events::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/server.yaml").unwrap();
//! println!("Binding to {}", loader.server().bind_address());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{ServerSettings, ServiceConfig, TimeZoneSetting};
