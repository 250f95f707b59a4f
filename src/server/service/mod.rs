//! Business logic layer.
//!
//! Services sit between controllers and repositories. They enforce the rules
//! storage knows nothing about (enrollment capacity, duplicate signups) and
//! turn missing records into `AppError::NotFound`.

pub mod activity;
pub mod status;
pub mod teacher;
