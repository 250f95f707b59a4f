//! One-shot backend selection at process startup.
//!
//! `select_backend` probes MongoDB once. On success both collections are bound
//! to the real database; on any failure a warning is logged and two fresh
//! in-memory collections are handed out instead. The choice is never revisited:
//! a process that starts in fallback mode stays there until restarted.

use std::{fmt, sync::Arc, time::Duration};

use tokio::sync::{Mutex, MutexGuard};
use tracing::{info, warn};

use crate::{
    collection::DocumentCollection, memory::MemoryCollection, mongo::MongoBackend,
    ACTIVITIES_COLLECTION, TEACHERS_COLLECTION,
};

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/";
pub const DEFAULT_DATABASE_NAME: &str = "mergington_high";
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(1000);

/// Where to look for MongoDB and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// MongoDB connection string.
    pub uri: String,
    /// Database holding the `activities` and `teachers` collections.
    pub database: String,
    /// Upper bound on the connectivity probe.
    pub probe_timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_MONGODB_URI.to_string(),
            database: DEFAULT_DATABASE_NAME.to_string(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }
}

/// Which backend serves the collections for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    MongoDb,
    Memory,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MongoDb => write!(f, "mongodb"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Handles to the two application collections.
///
/// Built once at startup and passed explicitly to whatever issues queries.
/// Cloning is cheap; clones share the same underlying collections.
#[derive(Clone)]
pub struct Collections {
    /// Activity catalog keyed by activity name.
    pub activities: Arc<dyn DocumentCollection>,
    /// Teacher accounts keyed by username.
    pub teachers: Arc<dyn DocumentCollection>,
    backend: Backend,
    writes: Arc<Mutex<()>>,
}

impl Collections {
    /// Binds both collections to a connected MongoDB database.
    pub fn mongo(backend: &MongoBackend) -> Self {
        Self {
            activities: Arc::new(backend.collection(ACTIVITIES_COLLECTION)),
            teachers: Arc::new(backend.collection(TEACHERS_COLLECTION)),
            backend: Backend::MongoDb,
            writes: Arc::default(),
        }
    }

    /// Two empty fallback collections, each owning its own storage.
    pub fn in_memory() -> Self {
        Self {
            activities: Arc::new(MemoryCollection::new()),
            teachers: Arc::new(MemoryCollection::new()),
            backend: Backend::Memory,
            writes: Arc::default(),
        }
    }

    /// Backend chosen for these collections.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Exclusive guard for a read, check, then write sequence.
    ///
    /// Single collection operations are atomic on both backends, but a caller
    /// that reads a document and updates it based on what it saw must hold this
    /// guard across both steps. Shared by every clone of these collections, so
    /// it serializes such sequences within one process only.
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.writes.lock().await
    }
}

impl fmt::Debug for Collections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collections")
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

/// Probes MongoDB and returns collections bound to whichever backend answered.
///
/// Connection failures of any kind (unreachable host, timeout, rejected
/// credentials, malformed URI) are logged and turned into fallback mode; they
/// never reach the caller.
pub async fn select_backend(config: &BackendConfig) -> Collections {
    match MongoBackend::connect(config).await {
        Ok(backend) => {
            info!(
                "Connected to MongoDB at {} (database `{}`)",
                config.uri, config.database
            );
            Collections::mongo(&backend)
        }
        Err(err) => {
            warn!("MongoDB not available, using in-memory storage: {}", err);
            Collections::in_memory()
        }
    }
}
