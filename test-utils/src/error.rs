use thiserror::Error;

/// Errors raised while preparing a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Inserting a fixture document failed.
    #[error(transparent)]
    Storage(#[from] storage::StorageError),

    /// Loading the built-in catalog failed.
    #[error(transparent)]
    Seed(#[from] seed::SeedError),
}
