//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources
//! needed by the request handlers. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use storage::Collections;

/// Application state containing shared resources and dependencies.
///
/// Cloning is cheap: `Collections` holds reference-counted handles, so every
/// clone talks to the same backend.
#[derive(Clone)]
pub struct AppState {
    /// Activity and teacher collections bound to the backend chosen at startup.
    ///
    /// The backend is fixed for the lifetime of the process; a server that
    /// started on the in-memory fallback keeps using it until restarted.
    pub collections: Collections,
}

impl AppState {
    /// Creates a new application state around the selected collections.
    ///
    /// # Arguments
    /// - `collections` - Collections returned by backend selection
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(collections: Collections) -> Self {
        Self { collections }
    }
}
