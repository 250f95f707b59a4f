//! Server-side domain models.
//!
//! Repositories decode stored documents into these types and services pass them
//! around; controllers convert them into the DTOs in `crate::model` before they
//! leave the server.

pub mod activity;
pub mod status;
pub mod teacher;
