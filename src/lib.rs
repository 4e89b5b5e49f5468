//! Sun events service.
//!
//! This crate answers `GET /v0/{sunrise|sunset}/lat{f64}/lon{f64}` with the
//! next occurrence of the requested event after the current instant.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod solar;
