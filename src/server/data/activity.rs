use storage::{bson::doc, DocumentCollection, StorageError, UpdateSpec};

use crate::server::model::activity::{Activity, ActivityFilter};

pub struct ActivityRepository<'a> {
    collection: &'a dyn DocumentCollection,
}

impl<'a> ActivityRepository<'a> {
    pub fn new(collection: &'a dyn DocumentCollection) -> Self {
        Self { collection }
    }

    /// Counts every stored activity
    pub async fn count(&self) -> Result<u64, StorageError> {
        self.collection.count_all().await
    }

    /// Gets an activity by its name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, StorageError> {
        self.collection
            .find_one(name)
            .await?
            .map(Activity::from_document)
            .transpose()
    }

    /// Gets every activity matching the filter, in storage order
    pub async fn find(&self, filter: ActivityFilter) -> Result<Vec<Activity>, StorageError> {
        self.collection
            .find(filter.into_query())
            .await?
            .into_iter()
            .map(Activity::from_document)
            .collect()
    }

    /// Gets the sorted, deduplicated weekdays on which any activity meets
    pub async fn get_days(&self) -> Result<Vec<String>, StorageError> {
        self.collection.aggregate_distinct_days().await
    }

    /// Appends a participant email to an activity.
    ///
    /// Does not check capacity or duplicates; the service layer does.
    ///
    /// # Returns
    /// - `Ok(true)` - Activity existed and was updated
    /// - `Ok(false)` - No activity with that name
    pub async fn add_participant(&self, name: &str, email: &str) -> Result<bool, StorageError> {
        let outcome = self
            .collection
            .update_one(name, UpdateSpec::Push(doc! { "participants": email }))
            .await?;

        Ok(outcome.modified_count > 0)
    }

    /// Removes a participant email from an activity.
    ///
    /// Removing an email that is not enrolled is not an error.
    ///
    /// # Returns
    /// - `Ok(true)` - Activity existed
    /// - `Ok(false)` - No activity with that name
    pub async fn remove_participant(&self, name: &str, email: &str) -> Result<bool, StorageError> {
        let outcome = self
            .collection
            .update_one(name, UpdateSpec::Pull(doc! { "participants": email }))
            .await?;

        Ok(outcome.modified_count > 0)
    }

    /// Replaces an activity's description
    pub async fn update_description(
        &self,
        name: &str,
        description: &str,
    ) -> Result<bool, StorageError> {
        let outcome = self
            .collection
            .update_one(name, UpdateSpec::Set(doc! { "description": description }))
            .await?;

        Ok(outcome.modified_count > 0)
    }
}
