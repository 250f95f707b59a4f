use storage::{DocumentCollection, StorageError};

use crate::server::model::teacher::Teacher;

pub struct TeacherRepository<'a> {
    collection: &'a dyn DocumentCollection,
}

impl<'a> TeacherRepository<'a> {
    pub fn new(collection: &'a dyn DocumentCollection) -> Self {
        Self { collection }
    }

    /// Counts every stored teacher account
    pub async fn count(&self) -> Result<u64, StorageError> {
        self.collection.count_all().await
    }

    /// Gets a teacher account by username, password hash included
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Teacher>, StorageError> {
        self.collection
            .find_one(username)
            .await?
            .map(Teacher::from_document)
            .transpose()
    }
}
