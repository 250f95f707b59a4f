use storage::Collections;

use crate::server::{
    data::activity::ActivityRepository,
    error::AppError,
    model::activity::{Activity, ActivityFilter},
};

pub struct ActivityService<'a> {
    collections: &'a Collections,
}

impl<'a> ActivityService<'a> {
    pub fn new(collections: &'a Collections) -> Self {
        Self { collections }
    }

    fn repo(&self) -> ActivityRepository<'a> {
        ActivityRepository::new(self.collections.activities.as_ref())
    }

    /// Gets activities matching the filter
    pub async fn list(&self, filter: ActivityFilter) -> Result<Vec<Activity>, AppError> {
        Ok(self.repo().find(filter).await?)
    }

    /// Gets every weekday on which at least one activity meets
    pub async fn days(&self) -> Result<Vec<String>, AppError> {
        Ok(self.repo().get_days().await?)
    }

    /// Enrolls a student in an activity.
    ///
    /// # Arguments
    /// - `name`: Activity name
    /// - `email`: Student email address, already normalized
    ///
    /// # Returns
    /// - `Ok(())`: Student enrolled
    /// - `Err(AppError::NotFound)`: No activity with that name
    /// - `Err(AppError::BadRequest)`: Student already enrolled, or activity at capacity
    pub async fn signup(&self, name: &str, email: &str) -> Result<(), AppError> {
        let repo = self.repo();
        let _writes = self.collections.lock_writes().await;

        let activity = repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound("Activity not found".to_string()))?;

        if activity.has_participant(email) {
            return Err(AppError::BadRequest(
                "Student is already signed up for this activity".to_string(),
            ));
        }
        if activity.is_full() {
            return Err(AppError::BadRequest("Activity is full".to_string()));
        }

        if !repo.add_participant(name, email).await? {
            return Err(AppError::NotFound("Activity not found".to_string()));
        }

        tracing::info!("Signed up {} for {}", email, name);

        Ok(())
    }

    /// Removes a student from an activity.
    ///
    /// # Returns
    /// - `Ok(())`: Student removed
    /// - `Err(AppError::NotFound)`: No activity with that name
    /// - `Err(AppError::BadRequest)`: Student was not enrolled
    pub async fn unregister(&self, name: &str, email: &str) -> Result<(), AppError> {
        let repo = self.repo();
        let _writes = self.collections.lock_writes().await;

        let activity = repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound("Activity not found".to_string()))?;

        if !activity.has_participant(email) {
            return Err(AppError::BadRequest(
                "Student is not signed up for this activity".to_string(),
            ));
        }

        if !repo.remove_participant(name, email).await? {
            return Err(AppError::NotFound("Activity not found".to_string()));
        }

        tracing::info!("Unregistered {} from {}", email, name);

        Ok(())
    }

    /// Replaces an activity's description and returns the updated activity
    pub async fn update_description(
        &self,
        name: &str,
        description: &str,
    ) -> Result<Activity, AppError> {
        let repo = self.repo();

        if !repo.update_description(name, description).await? {
            return Err(AppError::NotFound("Activity not found".to_string()));
        }

        repo.find_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound("Activity not found".to_string()))
    }
}
