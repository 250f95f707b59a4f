//! Activity factory for creating test activity documents.
//!
//! This module provides factory methods for inserting activity documents with
//! sensible defaults. The factory supports customization through a builder
//! pattern.

use storage::{
    bson::{doc, Document},
    DocumentCollection, StorageError, ID_FIELD,
};

use crate::factory::helpers::next_id;

/// Factory for creating test activities with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::activity::ActivityFactory;
///
/// let activity = ActivityFactory::new(test.activities())
///     .name("Chess Club")
///     .max_participants(1)
///     .build()
///     .await?;
/// ```
pub struct ActivityFactory<'a> {
    collection: &'a dyn DocumentCollection,
    name: String,
    description: String,
    schedule: String,
    days: Vec<String>,
    start_time: String,
    end_time: String,
    max_participants: i32,
    participants: Vec<String>,
}

impl<'a> ActivityFactory<'a> {
    /// Creates a new ActivityFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Activity {id}"` where id is auto-incremented
    /// - description: `"Test activity {id}"`
    /// - schedule: `"Mondays, 3:15 PM - 4:45 PM"`
    /// - days: `["Monday"]`
    /// - start_time / end_time: `"15:15"` / `"16:45"`
    /// - max_participants: `10`
    /// - participants: empty
    ///
    /// # Arguments
    /// - `collection` - Activity collection to insert into
    ///
    /// # Returns
    /// - `ActivityFactory` - New factory instance with defaults
    pub fn new(collection: &'a dyn DocumentCollection) -> Self {
        let id = next_id();
        Self {
            collection,
            name: format!("Activity {}", id),
            description: format!("Test activity {}", id),
            schedule: "Mondays, 3:15 PM - 4:45 PM".to_string(),
            days: vec!["Monday".to_string()],
            start_time: "15:15".to_string(),
            end_time: "16:45".to_string(),
            max_participants: 10,
            participants: Vec::new(),
        }
    }

    /// Sets the activity name, which is also its identity.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the free-text description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the weekdays the activity meets on.
    pub fn days(mut self, days: &[&str]) -> Self {
        self.days = days.iter().map(|day| day.to_string()).collect();
        self
    }

    /// Sets the `"HH:MM"` start and end times.
    pub fn times(mut self, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        self.start_time = start_time.into();
        self.end_time = end_time.into();
        self
    }

    /// Sets the capacity.
    pub fn max_participants(mut self, max_participants: i32) -> Self {
        self.max_participants = max_participants;
        self
    }

    /// Sets the already enrolled participants.
    pub fn participants(mut self, participants: &[&str]) -> Self {
        self.participants = participants.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Renders the activity document without inserting it.
    pub fn document(&self) -> Document {
        doc! {
            ID_FIELD: self.name.as_str(),
            "description": self.description.as_str(),
            "schedule": self.schedule.as_str(),
            "schedule_details": {
                "days": self.days.clone(),
                "start_time": self.start_time.as_str(),
                "end_time": self.end_time.as_str(),
            },
            "max_participants": self.max_participants,
            "participants": self.participants.clone(),
        }
    }

    /// Builds and inserts the activity document.
    ///
    /// # Returns
    /// - `Ok(Document)` - The inserted document
    /// - `Err(StorageError)` - Insert failed
    pub async fn build(self) -> Result<Document, StorageError> {
        let document = self.document();
        self.collection.insert_one(document.clone()).await?;
        Ok(document)
    }
}

/// Creates an activity with default values.
///
/// Shorthand for `ActivityFactory::new(collection).build().await`.
pub async fn create_activity(collection: &dyn DocumentCollection) -> Result<Document, StorageError> {
    ActivityFactory::new(collection).build().await
}
