use seed::SeedReport;
use storage::Collections;

use crate::server::{config::Config, error::AppError};

/// Chooses the storage backend for the lifetime of the process.
///
/// Probes MongoDB at the configured URI, bounded by the configured probe
/// timeout. Any failure is logged as a warning and the server continues on the
/// in-memory fallback, so this never fails.
///
/// # Arguments
/// - `config` - Application configuration containing the backend settings
///
/// # Returns
/// - `Collections` - Activity and teacher collections on the selected backend
pub async fn select_storage(config: &Config) -> Collections {
    storage::select_backend(&config.backend).await
}

/// Loads the built-in catalog into whichever collections are empty.
///
/// Must complete before the router starts accepting requests. Against a
/// persistent MongoDB this is a no-op after the first start; the in-memory
/// fallback is refilled on every start.
///
/// # Arguments
/// - `collections` - Collections returned by `select_storage`
///
/// # Returns
/// - `Ok(SeedReport)` - Number of documents inserted per collection
/// - `Err(AppError::SeedErr)` - Counting, hashing or inserting failed
pub async fn seed_database(collections: &Collections) -> Result<SeedReport, AppError> {
    let report = seed::init_database(collections).await?;

    if report == SeedReport::default() {
        tracing::info!("Collections already populated, skipping seed data");
    }

    Ok(report)
}
