//! In-memory fallback collection.
//!
//! Used when MongoDB cannot be reached at startup. Documents live in an
//! insertion-ordered map keyed by identity; the payload is stored without `_id`
//! and the identity is written back as the first field whenever a document is
//! read. Only the filter and update shapes the application issues are
//! understood, see `query` and `update` for the exact rules.
//!
//! Nothing here performs I/O. The lock only exists so the collection can sit
//! behind an `Arc<dyn DocumentCollection>`; no operation holds it across an await.

mod query;
mod update;

#[cfg(test)]
mod test;

use std::collections::BTreeSet;

use async_trait::async_trait;
use indexmap::IndexMap;
use mongodb::bson::{Bson, Document};
use tokio::sync::RwLock;

use crate::{
    collection::{identity_of, DocumentCollection, UpdateOutcome, UpdateSpec},
    error::StorageError,
    path, ID_FIELD,
};

/// Document collection held entirely in process memory.
///
/// Each instance exclusively owns its backing map, so two fallback collections
/// never observe each other's writes. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryCollection {
    /// Document payloads keyed by identity, in insertion order.
    documents: RwLock<IndexMap<String, Document>>,
}

impl MemoryCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Rebuilds a full document from its identity and stored payload.
fn with_identity(id: &str, payload: &Document) -> Document {
    let mut document = Document::new();
    document.insert(ID_FIELD, id);
    for (field, value) in payload {
        document.insert(field.clone(), value.clone());
    }
    document
}

#[async_trait]
impl DocumentCollection for MemoryCollection {
    async fn count_all(&self) -> Result<u64, StorageError> {
        Ok(self.documents.read().await.len() as u64)
    }

    async fn insert_one(&self, mut document: Document) -> Result<(), StorageError> {
        let id = identity_of(&document)?.to_string();
        document.remove(ID_FIELD);

        // Duplicate identities replace the payload in place
        self.documents.write().await.insert(id, document);

        Ok(())
    }

    async fn find_one(&self, id: &str) -> Result<Option<Document>, StorageError> {
        let documents = self.documents.read().await;

        Ok(documents
            .get(id)
            .map(|payload| with_identity(id, payload)))
    }

    async fn find(&self, filter: Document) -> Result<Vec<Document>, StorageError> {
        let documents = self.documents.read().await;

        Ok(documents
            .iter()
            .filter(|(_, payload)| query::matches(payload, &filter))
            .map(|(id, payload)| with_identity(id, payload))
            .collect())
    }

    async fn aggregate_distinct_days(&self) -> Result<Vec<String>, StorageError> {
        let documents = self.documents.read().await;

        let days: BTreeSet<String> = documents
            .values()
            .filter_map(|payload| payload.get_document(path::SCHEDULE_DETAILS).ok())
            .filter_map(|schedule| schedule.get_array(path::DAYS).ok())
            .flatten()
            .filter_map(|day| match day {
                Bson::String(day) => Some(day.clone()),
                _ => None,
            })
            .collect();

        Ok(days.into_iter().collect())
    }

    async fn update_one(
        &self,
        id: &str,
        update: UpdateSpec,
    ) -> Result<UpdateOutcome, StorageError> {
        let mut documents = self.documents.write().await;

        match documents.get_mut(id) {
            Some(payload) => {
                update::apply(id, payload, update)?;
                Ok(UpdateOutcome { modified_count: 1 })
            }
            None => Ok(UpdateOutcome { modified_count: 0 }),
        }
    }
}
