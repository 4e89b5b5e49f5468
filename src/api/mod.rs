//! HTTP API module for the sun events service.
//!
//! This module provides the single endpoint answering the next sunrise or
//! sunset for a coordinate pair.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{create_router, handle};
pub use request::{API_VERSION, PATH_SEGMENTS, SunRequest};
pub use response::SunResponse;
pub use state::AppState;
