//! Response types for the sun events API.
//!
//! Every response is plain text. Error responses carry the canonical status
//! text followed by a newline and are marked `nosniff`.

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::SunError;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// The status and body written for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SunResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The plain-text body.
    pub body: String,
}

impl SunResponse {
    /// A 200 response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.into(),
        }
    }

    /// A 200 response with no body.
    pub fn empty() -> Self {
        Self::ok(String::new())
    }

    /// An error response whose body is the status's reason phrase.
    pub fn error(status: StatusCode) -> Self {
        let reason = status.canonical_reason().unwrap_or("Error");
        Self {
            status,
            body: format!("{reason}\n"),
        }
    }

    /// Returns true if this is an error response.
    pub fn is_error(&self) -> bool {
        self.status.is_client_error() || self.status.is_server_error()
    }
}

impl IntoResponse for SunResponse {
    fn into_response(self) -> Response {
        let is_error = self.is_error();
        let mut response = (
            self.status,
            [(header::CONTENT_TYPE, TEXT_PLAIN)],
            self.body,
        )
            .into_response();

        if is_error {
            response.headers_mut().insert(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            );
        }
        response
    }
}

impl From<SunError> for SunResponse {
    fn from(error: SunError) -> Self {
        match error {
            // Disallowed methods answer 404, not 405.
            SunError::MethodNotAllowed { .. } => SunResponse::error(StatusCode::NOT_FOUND),
            SunError::MalformedPath { .. }
            | SunError::InvalidParameter { .. }
            | SunError::MissingParameter { .. } => SunResponse::error(StatusCode::BAD_REQUEST),
            SunError::ConfigNotFound { .. }
            | SunError::ConfigParseError { .. }
            | SunError::Server { .. } => SunResponse::error(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}
