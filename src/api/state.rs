//! Application state for the sun events API.
//!
//! This module defines the shared application state that is available
//! to the request handler.

use std::sync::Arc;

use crate::config::TimeZoneSetting;
use crate::solar::SunCalculator;

/// Shared application state.
///
/// Holds the sun calculator and the display time zone. Nothing in here is
/// mutated after construction.
#[derive(Clone)]
pub struct AppState {
    /// The calculator answering next-event queries.
    calculator: Arc<dyn SunCalculator>,
    /// Time zone used to render computed instants.
    time_zone: TimeZoneSetting,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(calculator: impl SunCalculator + 'static, time_zone: TimeZoneSetting) -> Self {
        Self {
            calculator: Arc::new(calculator),
            time_zone,
        }
    }

    /// Returns the sun calculator.
    pub fn calculator(&self) -> &dyn SunCalculator {
        self.calculator.as_ref()
    }

    /// Returns the display time zone.
    pub fn time_zone(&self) -> TimeZoneSetting {
        self.time_zone
    }
}
