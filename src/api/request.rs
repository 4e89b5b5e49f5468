//! Request parsing for the sun events API.
//!
//! Requests carry everything in the path: `/<version>/<event>/lat<f64>/lon<f64>`.
//! This module turns a method and raw path into a validated [`SunRequest`].

use axum::http::Method;

use crate::error::{SunError, SunResult};
use crate::models::{Coordinates, EventKind};

/// API version segment the router mounts the handler under.
pub const API_VERSION: &str = "v0";

/// Number of `/`-separated segments a valid path has.
pub const PATH_SEGMENTS: usize = 4;

const LATITUDE_PREFIX: &str = "lat";
const LONGITUDE_PREFIX: &str = "lon";

/// A request that passed validation.
///
/// `event` is `None` when the event segment names neither sunrise nor sunset;
/// such requests are still valid and answered with an empty body.
#[derive(Debug, Clone, PartialEq)]
pub struct SunRequest {
    /// The version segment, as sent.
    pub version: String,
    /// The raw event-name segment.
    pub event_segment: String,
    /// The recognised event, if any.
    pub event: Option<EventKind>,
    /// The parsed coordinates.
    pub coordinates: Coordinates,
}

impl SunRequest {
    /// Validates the method and path of a request.
    ///
    /// Checks run in order and the first failure wins:
    /// 1. the method must be GET
    /// 2. the path must have exactly [`PATH_SEGMENTS`] segments
    /// 3. every `lat`/`lon` token must parse as a finite `f64`
    /// 4. both a latitude and a longitude must be present
    ///
    /// # Example
    ///
    /// ```
    /// use axum::http::Method;
    /// use sun_events::api::SunRequest;
    /// use sun_events::models::EventKind;
    ///
    /// let request = SunRequest::parse(&Method::GET, "/v0/sunset/lon-0.12/lat51.5").unwrap();
    /// assert_eq!(request.event, Some(EventKind::Sunset));
    /// assert_eq!(request.coordinates.latitude, 51.5);
    /// assert_eq!(request.coordinates.longitude, -0.12);
    /// ```
    pub fn parse(method: &Method, path: &str) -> SunResult<Self> {
        if *method != Method::GET {
            return Err(SunError::MethodNotAllowed {
                method: method.to_string(),
            });
        }

        let trimmed = path.strip_prefix('/').unwrap_or(path);
        let segments: Vec<&str> = trimmed.split('/').collect();
        if segments.len() != PATH_SEGMENTS {
            return Err(SunError::MalformedPath {
                segments: segments.len(),
            });
        }
        let (version, event_segment) = (segments[0], segments[1]);

        // Tokens are found by prefix, not position, and a repeat overwrites.
        let mut latitude = None;
        let mut longitude = None;
        for segment in &segments {
            if segment.len() <= LATITUDE_PREFIX.len() {
                continue;
            }
            if let Some(value) = segment.strip_prefix(LATITUDE_PREFIX) {
                latitude = Some(parse_token(segment, value)?);
            } else if let Some(value) = segment.strip_prefix(LONGITUDE_PREFIX) {
                longitude = Some(parse_token(segment, value)?);
            }
        }

        let coordinates = Coordinates::from_parts(latitude, longitude).ok_or_else(|| {
            let name = if latitude.is_none() {
                "latitude"
            } else {
                "longitude"
            };
            SunError::MissingParameter {
                name: name.to_string(),
            }
        })?;

        Ok(Self {
            version: version.to_string(),
            event_segment: event_segment.to_string(),
            event: EventKind::from_segment(event_segment),
            coordinates,
        })
    }
}

/// Parses the numeric part of a `lat`/`lon` token.
///
/// Overflowing literals such as `1e400` and the `inf`/`nan` spellings are
/// rejected along with plain syntax errors.
fn parse_token(segment: &str, value: &str) -> SunResult<f64> {
    let parsed = value
        .parse::<f64>()
        .map_err(|e| SunError::InvalidParameter {
            token: segment.to_string(),
            message: e.to_string(),
        })?;

    if !parsed.is_finite() {
        return Err(SunError::InvalidParameter {
            token: segment.to_string(),
            message: "value out of range".to_string(),
        });
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get(path: &str) -> SunResult<SunRequest> {
        SunRequest::parse(&Method::GET, path)
    }

    #[test]
    fn test_parses_well_formed_sunrise_path() {
        let request = get("/v0/sunrise/lat40.7128/lon-74.0060").unwrap();

        assert_eq!(request.version, "v0");
        assert_eq!(request.event, Some(EventKind::Sunrise));
        assert_eq!(request.coordinates, Coordinates::new(40.7128, -74.0060));
    }

    #[test]
    fn test_tokens_may_come_in_either_order() {
        let forward = get("/v0/sunset/lat10/lon20").unwrap();
        let reversed = get("/v0/sunset/lon20/lat10").unwrap();

        assert_eq!(forward.coordinates, reversed.coordinates);
    }

    #[test]
    fn test_non_get_method_rejected_before_path_checks() {
        let result = SunRequest::parse(&Method::POST, "/garbage");

        match result {
            Err(SunError::MethodNotAllowed { method }) => assert_eq!(method, "POST"),
            other => panic!("Expected MethodNotAllowed, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_segment_count_is_malformed() {
        assert!(matches!(
            get("/v0/sunrise/lat10"),
            Err(SunError::MalformedPath { segments: 3 })
        ));
        assert!(matches!(
            get("/v0/sunrise/lat10/lon10/extra"),
            Err(SunError::MalformedPath { segments: 5 })
        ));
    }

    #[test]
    fn test_trailing_slash_adds_a_segment() {
        assert!(matches!(
            get("/v0/sunrise/lat10/lon10/"),
            Err(SunError::MalformedPath { segments: 5 })
        ));
    }

    #[test]
    fn test_unparseable_token_is_invalid() {
        match get("/v0/sunrise/latXX/lon10") {
            Err(SunError::InvalidParameter { token, .. }) => assert_eq!(token, "latXX"),
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_bare_prefix_counts_as_missing() {
        assert!(matches!(
            get("/v0/sunrise/lat/lon10"),
            Err(SunError::MissingParameter { ref name }) if name == "latitude"
        ));
    }

    #[test]
    fn test_missing_longitude_reported() {
        assert!(matches!(
            get("/v0/sunrise/lat10/foo"),
            Err(SunError::MissingParameter { ref name }) if name == "longitude"
        ));
    }

    #[test]
    fn test_event_segment_starting_with_prefix_is_parsed_as_token() {
        // "lattice" is scanned like any other segment and fails to parse.
        assert!(matches!(
            get("/v0/lattice/lat10/lon10"),
            Err(SunError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_repeated_token_last_one_wins() {
        let request = get("/v0/lat5/lat10/lon10").unwrap();

        assert_eq!(request.coordinates.latitude, 10.0);
        assert_eq!(request.event, None);
    }

    #[test]
    fn test_unknown_event_is_not_an_error() {
        let request = get("/v0/moonphase/lat10/lon10").unwrap();

        assert_eq!(request.event_segment, "moonphase");
        assert_eq!(request.event, None);
    }

    #[test]
    fn test_overflowing_literal_is_invalid() {
        for path in ["/v0/sunrise/lat1e400/lon10", "/v0/sunrise/lat10/lon-1e400"] {
            match get(path) {
                Err(SunError::InvalidParameter { message, .. }) => {
                    assert_eq!(message, "value out of range")
                }
                other => panic!("Expected InvalidParameter for {}, got {:?}", path, other),
            }
        }
    }

    #[test]
    fn test_non_finite_spellings_are_invalid() {
        for token in ["latinf", "lat-infinity", "latNaN", "lat+inf"] {
            let path = format!("/v0/sunrise/{token}/lon10");
            assert!(
                matches!(get(&path), Err(SunError::InvalidParameter { .. })),
                "{} should be rejected",
                token
            );
        }
    }

    #[test]
    fn test_hex_float_literal_is_invalid() {
        assert!(matches!(
            get("/v0/sunrise/lat0x1p4/lon10"),
            Err(SunError::InvalidParameter { ref token, .. }) if token == "lat0x1p4"
        ));
    }

    #[test]
    fn test_exponent_and_sign_forms_are_accepted() {
        let request = get("/v0/sunrise/lat+1.5e1/lon-2E-1").unwrap();

        assert_eq!(request.coordinates, Coordinates::new(15.0, -0.2));
    }

    #[test]
    fn test_no_range_validation() {
        let request = get("/v0/sunrise/lat123.5/lon-720").unwrap();
        assert_eq!(request.coordinates, Coordinates::new(123.5, -720.0));
    }
}
