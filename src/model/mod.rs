//! Data transfer objects exchanged over the HTTP API.
//!
//! These types are the JSON shapes clients see. Server-side domain models live
//! in `server::model` and convert into these at the controller boundary.

pub mod activity;
pub mod api;
pub mod status;
pub mod teacher;
