//! Day-by-day sunrise/sunset search.
//!
//! The `sunrise` crate answers "when does the sun rise and set on this
//! calendar date at this place". Finding the *next* event is a walk forward
//! over dates until an event lands after `now`.
//!
//! Coordinates are taken as given by the request, so they are first folded
//! onto the globe: longitude wraps modulo 360 and a latitude past a pole
//! comes back down the far meridian.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::models::{Coordinates, EventKind};

use super::SunCalculator;

/// Number of calendar dates examined before giving up.
///
/// A full year plus a margin, so that the end of a polar night is always
/// reached for any physical latitude.
pub const SEARCH_HORIZON_DAYS: usize = 370;

/// Latitude used when the exact position never sees the sun cross the
/// horizon within the search horizon.
///
/// Within a fraction of a degree of a pole the daily declination step can
/// jump over the few days on which the sun grazes the horizon. One degree
/// off the pole the crossing window spans several days around each equinox.
pub const POLAR_LATITUDE_LIMIT: f64 = 89.0;

/// [`SunCalculator`] backed by `sunrise::sunrise_sunset`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlmanacCalculator;

impl AlmanacCalculator {
    /// Creates a new calculator.
    pub fn new() -> Self {
        Self
    }
}

impl SunCalculator for AlmanacCalculator {
    fn next_event(
        &self,
        now: DateTime<Utc>,
        kind: EventKind,
        coordinates: Coordinates,
    ) -> Option<DateTime<Utc>> {
        let position = normalize(coordinates);

        search(now, kind, position).or_else(|| {
            let clamped = Coordinates::new(
                position
                    .latitude
                    .clamp(-POLAR_LATITUDE_LIMIT, POLAR_LATITUDE_LIMIT),
                position.longitude,
            );
            (clamped != position)
                .then(|| search(now, kind, clamped))
                .flatten()
        })
    }
}

/// Folds arbitrary finite coordinates onto latitude `[-90, 90]` and
/// longitude `[-180, 180)`.
///
/// Crossing a pole lands on the opposite meridian. NaN stays NaN.
pub fn normalize(coordinates: Coordinates) -> Coordinates {
    // 0 is the south pole, 180 the north pole, (180, 360) the far side.
    let around = (coordinates.latitude + 90.0).rem_euclid(360.0);
    let (latitude, longitude) = if around <= 180.0 {
        (around - 90.0, coordinates.longitude)
    } else {
        (270.0 - around, coordinates.longitude + 180.0)
    };

    Coordinates::new(latitude, (longitude + 180.0).rem_euclid(360.0) - 180.0)
}

fn search(now: DateTime<Utc>, kind: EventKind, coordinates: Coordinates) -> Option<DateTime<Utc>> {
    // Local dates west of Greenwich lag the UTC date, so start one day early.
    let first_date = now.date_naive().pred_opt()?;

    first_date
        .iter_days()
        .take(SEARCH_HORIZON_DAYS)
        .filter_map(|date| event_on(date, kind, coordinates))
        .find(|instant| *instant > now)
}

/// Returns the `kind` event on `date`, or `None` if the sun does not cross
/// the horizon that day.
fn event_on(date: NaiveDate, kind: EventKind, coordinates: Coordinates) -> Option<DateTime<Utc>> {
    let (sunrise, sunset) = sunrise::sunrise_sunset(
        coordinates.latitude,
        coordinates.longitude,
        date.year(),
        date.month(),
        date.day(),
    );

    let timestamp = match kind {
        EventKind::Sunrise => sunrise,
        EventKind::Sunset => sunset,
    };

    // Polar day/night yields a NaN hour angle, which casts to zero.
    if timestamp == 0 {
        return None;
    }

    DateTime::from_timestamp(timestamp, 0)
}
