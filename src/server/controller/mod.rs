//! HTTP request handlers.
//!
//! Controllers validate and convert request input, call a service, and convert
//! the returned domain model into a DTO. Every handler carries a
//! `#[utoipa::path]` annotation and is registered in `router`.

pub mod activity;
pub mod status;
pub mod teacher;
