//! HTTP request handlers for the sun events API.
//!
//! This module contains the route table and the handler for
//! `GET /v0/{sunrise|sunset}/lat{f64}/lon{f64}`.

use axum::{
    Router,
    extract::State,
    http::{Method, StatusCode, Uri},
    routing::any,
};
use chrono::{DateTime, Utc};
use percent_encoding::percent_decode_str;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::request::{API_VERSION, SunRequest};
use super::response::SunResponse;
use super::state::AppState;

/// Creates the API router.
///
/// The sun handler accepts every method under `/v0/` so that it can answer
/// non-GET requests itself. Any other path is a 404.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(&format!("/{API_VERSION}/"), any(sun_handler))
        .route(&format!("/{API_VERSION}/*rest"), any(sun_handler))
        .fallback(not_found_handler)
        .with_state(state)
}

/// Handler for everything under `/v0/`.
///
/// Tokens are matched against the percent-decoded path, so `lat40%2E7`
/// reads as `lat40.7`.
async fn sun_handler(State(state): State<AppState>, method: Method, uri: Uri) -> SunResponse {
    let correlation_id = Uuid::new_v4();
    let path = percent_decode_str(uri.path()).decode_utf8_lossy();

    respond(&state, &method, &path, Utc::now(), correlation_id)
}

async fn not_found_handler(uri: Uri) -> SunResponse {
    debug!(path = %uri.path(), "No route");
    SunResponse::error(StatusCode::NOT_FOUND)
}

/// Answers one request at the instant `now`.
///
/// This is the whole request contract: validation failures become 404/400
/// responses, an unrecognised event segment becomes an empty 200, and a
/// recognised event becomes a 200 whose body is the next occurrence rendered
/// in the configured time zone.
///
/// # Example
///
/// ```
/// use axum::http::{Method, StatusCode};
/// use chrono::{TimeZone, Utc};
/// use sun_events::api::{AppState, handle};
/// use sun_events::config::TimeZoneSetting;
/// use sun_events::solar::AlmanacCalculator;
///
/// let state = AppState::new(AlmanacCalculator::new(), TimeZoneSetting::Utc);
/// let now = Utc.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap();
///
/// let response = handle(&state, &Method::GET, "/v0/sunrise/lat0/lon0", now);
/// assert_eq!(response.status, StatusCode::OK);
/// assert!(response.body.starts_with("2024-06-21 "));
/// ```
pub fn handle(state: &AppState, method: &Method, path: &str, now: DateTime<Utc>) -> SunResponse {
    respond(state, method, path, now, Uuid::new_v4())
}

/// [`handle`] with the caller's correlation id attached to every log event.
fn respond(
    state: &AppState,
    method: &Method,
    path: &str,
    now: DateTime<Utc>,
    correlation_id: Uuid,
) -> SunResponse {
    let request = match SunRequest::parse(method, path) {
        Ok(request) => request,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                method = %method,
                path = %path,
                error = %err,
                "Rejected request"
            );
            return err.into();
        }
    };

    let Some(kind) = request.event else {
        debug!(
            correlation_id = %correlation_id,
            event = %request.event_segment,
            "Unrecognised event, empty response"
        );
        return SunResponse::empty();
    };

    let coordinates = request.coordinates;
    match state.calculator().next_event(now, kind, coordinates) {
        Some(instant) => {
            info!(
                correlation_id = %correlation_id,
                event = %kind,
                latitude = coordinates.latitude,
                longitude = coordinates.longitude,
                at = %instant,
                "Computed next event"
            );
            SunResponse::ok(state.time_zone().render(instant))
        }
        None => {
            warn!(
                correlation_id = %correlation_id,
                event = %kind,
                latitude = coordinates.latitude,
                longitude = coordinates.longitude,
                "No event within search horizon"
            );
            SunResponse::empty()
        }
    }
}
