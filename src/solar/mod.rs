//! Sun event calculation.
//!
//! The HTTP layer only needs to know when the next sunrise or sunset happens
//! for a coordinate pair. This module defines that capability as the
//! [`SunCalculator`] trait and provides [`AlmanacCalculator`], the default
//! implementation backed by the `sunrise` crate.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use sun_events::models::Coordinates;
//! use sun_events::solar::{AlmanacCalculator, SunCalculator};
//!
//! let now = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
//! let london = Coordinates::new(51.5074, -0.1278);
//!
//! let sunset = AlmanacCalculator::new().next_sunset(now, london).unwrap();
//! assert!(sunset > now);
//! ```

mod almanac;

use chrono::{DateTime, Utc};

use crate::models::{Coordinates, EventKind};

pub use almanac::{AlmanacCalculator, POLAR_LATITUDE_LIMIT, SEARCH_HORIZON_DAYS, normalize};

/// Computes the next occurrence of a solar event.
///
/// Implementations must be pure with respect to their inputs: the same
/// `now`, kind and coordinates always produce the same answer.
pub trait SunCalculator: Send + Sync {
    /// Returns the first `kind` event strictly after `now` at `coordinates`,
    /// or `None` if the event does not occur within the calculator's horizon.
    fn next_event(
        &self,
        now: DateTime<Utc>,
        kind: EventKind,
        coordinates: Coordinates,
    ) -> Option<DateTime<Utc>>;

    /// Returns the next sunrise after `now`.
    fn next_sunrise(&self, now: DateTime<Utc>, coordinates: Coordinates) -> Option<DateTime<Utc>> {
        self.next_event(now, EventKind::Sunrise, coordinates)
    }

    /// Returns the next sunset after `now`.
    fn next_sunset(&self, now: DateTime<Utc>, coordinates: Coordinates) -> Option<DateTime<Utc>> {
        self.next_event(now, EventKind::Sunset, coordinates)
    }
}
