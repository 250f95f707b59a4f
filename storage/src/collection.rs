//! The collection contract shared by every storage backend.
//!
//! Application code only ever talks to `dyn DocumentCollection`; whether the
//! handle is backed by MongoDB or by the in-memory fallback is decided once at
//! startup and is invisible to callers for the operations defined here.

use async_trait::async_trait;
use mongodb::bson::Document;

use crate::{error::StorageError, ID_FIELD};

/// One update operation applied by `update_one`.
///
/// Exactly one update kind is applied per call. The payload maps field names to
/// values; for `Push` and `Pull` each value is the element appended to or
/// removed from the array stored under that field.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateSpec {
    /// Shallow merge of the given fields into the document.
    Set(Document),
    /// Append each value to the array under its field, creating the array if absent.
    Push(Document),
    /// Remove the first occurrence of each value from the array under its field.
    Pull(Document),
}

impl UpdateSpec {
    /// Operator keyword of this update as understood by MongoDB.
    pub fn operator(&self) -> &'static str {
        match self {
            Self::Set(_) => "$set",
            Self::Push(_) => "$push",
            Self::Pull(_) => "$pull",
        }
    }

    /// Renders the update in MongoDB's `{ "$op": { field: value } }` shape.
    pub fn into_document(self) -> Document {
        let operator = self.operator();
        let fields = match self {
            Self::Set(fields) | Self::Push(fields) | Self::Pull(fields) => fields,
        };
        let mut document = Document::new();
        document.insert(operator, fields);
        document
    }
}

/// Result of `update_one`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// 1 when a document with the requested identity existed, otherwise 0.
    pub modified_count: u64,
}

/// Async document collection addressed by a string `_id`.
///
/// Both backends must produce identical observable results for every operation.
/// Known differences are limited to shapes callers must not rely on: duplicate
/// identities on insert and unrecognized filter operators.
#[async_trait]
pub trait DocumentCollection: Send + Sync {
    /// Total number of documents, ignoring any filter.
    async fn count_all(&self) -> Result<u64, StorageError>;

    /// Inserts a document carrying a string `_id`.
    ///
    /// Callers must only insert fresh identities. The fallback overwrites a
    /// duplicate silently while MongoDB rejects it.
    ///
    /// # Returns
    /// - `Ok(())` - Document stored
    /// - `Err(StorageError::MissingIdentity)` - Document has no string `_id`
    /// - `Err(StorageError::Mongo)` - Driver error, including duplicate key
    async fn insert_one(&self, document: Document) -> Result<(), StorageError>;

    /// Exact identity lookup.
    async fn find_one(&self, id: &str) -> Result<Option<Document>, StorageError>;

    /// All documents matching `filter`, each with `_id` as its first field.
    ///
    /// An empty filter returns every document.
    async fn find(&self, filter: Document) -> Result<Vec<Document>, StorageError>;

    /// Union of every `schedule_details.days` entry, deduplicated and sorted.
    async fn aggregate_distinct_days(&self) -> Result<Vec<String>, StorageError>;

    /// Applies `update` to the document with identity `id`.
    ///
    /// An unknown identity is not an error; it is reported as `modified_count == 0`.
    async fn update_one(&self, id: &str, update: UpdateSpec)
        -> Result<UpdateOutcome, StorageError>;
}

/// Reads the string identity of a document about to be inserted.
pub(crate) fn identity_of(document: &Document) -> Result<&str, StorageError> {
    document
        .get_str(ID_FIELD)
        .map_err(|_| StorageError::MissingIdentity)
}
