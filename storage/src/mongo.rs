//! MongoDB-backed collection.
//!
//! Thin adapter from the `DocumentCollection` contract onto the official driver.
//! Filters and updates are forwarded unchanged, so MongoDB's own query engine is
//! the reference behaviour the in-memory fallback imitates.

use async_trait::async_trait;
use mongodb::{
    bson::{doc, Document},
    options::ClientOptions,
    Client, Collection, Database,
};

use crate::{
    collection::{identity_of, DocumentCollection, UpdateOutcome, UpdateSpec},
    error::StorageError,
    path,
    selector::BackendConfig,
    ID_FIELD,
};

/// Connected MongoDB database.
#[derive(Debug, Clone)]
pub struct MongoBackend {
    database: Database,
}

impl MongoBackend {
    /// Connects to MongoDB and verifies the server answers a `ping`.
    ///
    /// Server selection and connection establishment are both bounded by the
    /// configured probe timeout, and the whole probe is additionally wrapped in a
    /// Tokio timeout so URI resolution cannot stall startup.
    ///
    /// # Arguments
    /// - `config` - Connection URI, database name and probe timeout
    ///
    /// # Returns
    /// - `Ok(MongoBackend)` - Server reachable and responding
    /// - `Err(StorageError::Mongo)` - Invalid URI, unreachable server or failed authentication
    /// - `Err(StorageError::ProbeTimeout)` - Probe exceeded the timeout
    pub async fn connect(config: &BackendConfig) -> Result<Self, StorageError> {
        let probe = async {
            let mut options = ClientOptions::parse(&config.uri).await?;
            options.server_selection_timeout = Some(config.probe_timeout);
            options.connect_timeout = Some(config.probe_timeout);

            let client = Client::with_options(options)?;
            client
                .database("admin")
                .run_command(doc! { "ping": 1 })
                .await?;

            Ok::<_, StorageError>(client.database(&config.database))
        };

        let database = tokio::time::timeout(config.probe_timeout, probe)
            .await
            .map_err(|_| StorageError::ProbeTimeout(config.probe_timeout))??;

        Ok(Self { database })
    }

    /// Handle to the named collection of this database.
    pub fn collection(&self, name: &str) -> MongoCollection {
        MongoCollection::new(self.database.collection(name))
    }

    /// Drops the whole database, used to clean up throwaway test databases.
    pub async fn drop_database(&self) -> Result<(), StorageError> {
        self.database.drop().await?;
        Ok(())
    }
}

/// A single MongoDB collection of untyped documents.
#[derive(Debug, Clone)]
pub struct MongoCollection {
    inner: Collection<Document>,
}

impl MongoCollection {
    /// Wraps a driver collection handle.
    pub fn new(inner: Collection<Document>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DocumentCollection for MongoCollection {
    async fn count_all(&self) -> Result<u64, StorageError> {
        Ok(self.inner.count_documents(doc! {}).await?)
    }

    async fn insert_one(&self, document: Document) -> Result<(), StorageError> {
        // Without this check the driver would generate an ObjectId identity
        identity_of(&document)?;

        self.inner.insert_one(document).await?;

        Ok(())
    }

    async fn find_one(&self, id: &str) -> Result<Option<Document>, StorageError> {
        Ok(self.inner.find_one(doc! { ID_FIELD: id }).await?)
    }

    async fn find(&self, filter: Document) -> Result<Vec<Document>, StorageError> {
        let mut cursor = self.inner.find(filter).await?;

        let mut documents = Vec::new();
        while cursor.advance().await? {
            documents.push(cursor.deserialize_current()?);
        }

        Ok(documents)
    }

    async fn aggregate_distinct_days(&self) -> Result<Vec<String>, StorageError> {
        let days_field = format!("${}", path::SCHEDULE_DAYS);
        let pipeline = vec![
            doc! { "$unwind": days_field.as_str() },
            doc! { "$group": { "_id": days_field.as_str() } },
            doc! { "$sort": { "_id": 1 } },
        ];

        let mut cursor = self.inner.aggregate(pipeline).await?;

        let mut days = Vec::new();
        while cursor.advance().await? {
            let entry = cursor.deserialize_current()?;
            if let Ok(day) = entry.get_str(ID_FIELD) {
                days.push(day.to_string());
            }
        }

        Ok(days)
    }

    async fn update_one(
        &self,
        id: &str,
        update: UpdateSpec,
    ) -> Result<UpdateOutcome, StorageError> {
        let result = self
            .inner
            .update_one(doc! { ID_FIELD: id }, update.into_document())
            .await?;

        // Matched rather than modified: a `$pull` of an absent value still
        // reports the document as found, as the fallback does
        Ok(UpdateOutcome {
            modified_count: result.matched_count,
        })
    }
}
