use storage::Collections;

use crate::server::{
    data::{activity::ActivityRepository, teacher::TeacherRepository},
    error::AppError,
    model::status::StorageStatus,
};

pub struct StatusService<'a> {
    collections: &'a Collections,
}

impl<'a> StatusService<'a> {
    pub fn new(collections: &'a Collections) -> Self {
        Self { collections }
    }

    /// Reports the active backend and how many documents each collection holds
    pub async fn get_status(&self) -> Result<StorageStatus, AppError> {
        let activities = ActivityRepository::new(self.collections.activities.as_ref())
            .count()
            .await?;
        let teachers = TeacherRepository::new(self.collections.teachers.as_ref())
            .count()
            .await?;

        Ok(StorageStatus {
            backend: self.collections.backend(),
            activities,
            teachers,
        })
    }
}
