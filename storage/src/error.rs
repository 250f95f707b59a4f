use std::time::Duration;

use thiserror::Error;

/// Errors raised by either collection backend or by the startup probe.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Error returned by the MongoDB driver.
    ///
    /// Boxed because the driver error is large and would bloat every `Result`
    /// returned by the collection contract.
    #[error(transparent)]
    Mongo(#[from] Box<mongodb::error::Error>),

    /// A stored document could not be decoded into the requested type.
    #[error(transparent)]
    Decode(#[from] mongodb::bson::de::Error),

    /// A document handed to `insert_one` has no string `_id`.
    #[error("Document is missing a string `_id` identity field")]
    MissingIdentity,

    /// `$push` or `$pull` targeted a field that holds something other than an array.
    #[error("Cannot apply {operator} to non-array field `{field}` of document `{id}`")]
    NotAnArray {
        /// Update operator that was rejected
        operator: &'static str,
        /// Field holding the non-array value
        field: String,
        /// Identity of the target document
        id: String,
    },

    /// The connectivity probe did not answer within the configured timeout.
    #[error("MongoDB did not respond within {0:?}")]
    ProbeTimeout(Duration),
}

impl From<mongodb::error::Error> for StorageError {
    fn from(err: mongodb::error::Error) -> Self {
        StorageError::Mongo(Box::new(err))
    }
}
