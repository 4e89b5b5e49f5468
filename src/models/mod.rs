//! Core data models for the sun events service.
//!
//! This module contains the domain types shared by the HTTP layer and the
//! sun calculator.

mod coordinates;
mod event;

pub use coordinates::Coordinates;
pub use event::EventKind;
