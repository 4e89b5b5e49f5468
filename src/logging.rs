//! Structured logging setup for the sun events service.
//!
//! This module provides:
//! - [`LoggingConfig`]: the `logging` section of the configuration file
//! - [`init_logging`]: installs a `tracing` subscriber with text or JSON output
//!
//! `RUST_LOG`, when set, takes precedence over the configured level.

use serde::Deserialize;
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Layer, fmt, fmt::MakeWriter, prelude::*, registry::LookupSpan,
};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text logging (default).
    #[default]
    Text,
    /// JSON structured logging, one object per line.
    Json,
}

/// Configuration for the logging system.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
    /// Log level filter (e.g. "info", "debug", "sun_events=trace").
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Builds the level filter, preferring `RUST_LOG` over the configured level.
    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Must be called once, at startup, before the server begins accepting
/// requests.
pub fn init_logging(config: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(config.filter());

    match config.format {
        LogFormat::Text => {
            registry.with(fmt::layer().with_target(false)).init();
        }
        LogFormat::Json => {
            registry.with(json_layer(std::io::stdout)).init();
        }
    }
}

/// JSON output layer: one flat object per event.
///
/// Span context is left out, so request-scoped fields such as
/// `correlation_id` are recorded on each event.
pub(crate) fn json_layer<S, W>(make_writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer()
        .json()
        .with_current_span(false)
        .with_span_list(false)
        .with_writer(make_writer)
}
