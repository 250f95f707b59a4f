//! Document storage for the activity signup backend.
//!
//! Provides a single async collection contract (`DocumentCollection`) with two
//! implementations: a MongoDB-backed collection and an in-memory fallback that
//! replicates the handful of query and update shapes the application issues.
//! The backend is chosen once at startup by `selector::select_backend`, which
//! probes MongoDB and falls back to memory when the server cannot be reached.
//!
//! # Overview
//!
//! - **collection**: the `DocumentCollection` trait, `UpdateSpec` and `UpdateOutcome`
//! - **memory**: `MemoryCollection`, the in-process fallback
//! - **mongo**: `MongoBackend` and `MongoCollection`, the real backend
//! - **selector**: `BackendConfig`, `Collections` and the startup probe
//! - **error**: `StorageError`
//!
//! # Usage
//!
//! ```rust,ignore
//! use storage::{bson::doc, Collections, UpdateSpec};
//!
//! let collections = Collections::in_memory();
//! collections
//!     .activities
//!     .insert_one(doc! { "_id": "Chess Club", "participants": [] })
//!     .await?;
//! collections
//!     .activities
//!     .update_one("Chess Club", UpdateSpec::Push(doc! { "participants": "a@b.edu" }))
//!     .await?;
//! ```

pub mod collection;
pub mod error;
pub mod memory;
pub mod mongo;
pub mod selector;

#[cfg(test)]
mod transparency;

pub use mongodb::bson;

pub use collection::{DocumentCollection, UpdateOutcome, UpdateSpec};
pub use error::StorageError;
pub use memory::MemoryCollection;
pub use mongo::{MongoBackend, MongoCollection};
pub use selector::{select_backend, Backend, BackendConfig, Collections};

/// Reserved identity field carried by every document.
pub const ID_FIELD: &str = "_id";

/// Logical name of the activity catalog collection.
pub const ACTIVITIES_COLLECTION: &str = "activities";

/// Logical name of the teacher account collection.
pub const TEACHERS_COLLECTION: &str = "teachers";

/// Dotted paths understood by the fallback query matcher and the days aggregation.
pub mod path {
    pub const SCHEDULE_DETAILS: &str = "schedule_details";
    pub const DAYS: &str = "days";
    pub const START_TIME: &str = "start_time";
    pub const END_TIME: &str = "end_time";

    pub const SCHEDULE_DAYS: &str = "schedule_details.days";
    pub const SCHEDULE_START_TIME: &str = "schedule_details.start_time";
    pub const SCHEDULE_END_TIME: &str = "schedule_details.end_time";
}
