//! Bootstrap data for empty collections.
//!
//! `init_database` runs once at startup after the storage backend has been
//! selected. Each collection is filled from the built-in catalog only when it
//! is empty, so restarting against a persistent MongoDB leaves existing data
//! alone while a fresh in-memory fallback is populated every time.

pub mod catalog;
pub mod password;

use storage::{Collections, DocumentCollection, StorageError};
use thiserror::Error;
use tracing::info;

use crate::password::{hash_password, PasswordError};

#[derive(Error, Debug)]
pub enum SeedError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Password(#[from] PasswordError),
}

/// Number of documents inserted into each collection by one seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub activities_inserted: usize,
    pub teachers_inserted: usize,
}

/// Populates every empty collection from the built-in catalog.
///
/// Teacher passwords are hashed at this point; plaintext never reaches storage.
///
/// # Arguments
/// - `collections` - Collections returned by backend selection
///
/// # Returns
/// - `Ok(SeedReport)` - Counts of inserted documents (zero for collections that already had data)
/// - `Err(SeedError::Storage)` - Counting or inserting failed
/// - `Err(SeedError::Password)` - Hashing a teacher credential failed
pub async fn init_database(collections: &Collections) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport::default();

    if is_empty(collections.activities.as_ref()).await? {
        for document in catalog::initial_activities() {
            collections.activities.insert_one(document).await?;
            report.activities_inserted += 1;
        }
        info!("Seeded {} activities", report.activities_inserted);
    }

    if is_empty(collections.teachers.as_ref()).await? {
        for teacher in catalog::initial_teachers() {
            let password_hash = hash_password(teacher.password)?;
            collections
                .teachers
                .insert_one(teacher.into_document(password_hash))
                .await?;
            report.teachers_inserted += 1;
        }
        info!("Seeded {} teacher accounts", report.teachers_inserted);
    }

    Ok(report)
}

async fn is_empty(collection: &dyn DocumentCollection) -> Result<bool, StorageError> {
    Ok(collection.count_all().await? == 0)
}
