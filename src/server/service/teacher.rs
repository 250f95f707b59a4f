use storage::Collections;

use crate::server::{
    data::teacher::TeacherRepository, error::AppError, model::teacher::TeacherProfile,
};

pub struct TeacherService<'a> {
    collections: &'a Collections,
}

impl<'a> TeacherService<'a> {
    pub fn new(collections: &'a Collections) -> Self {
        Self { collections }
    }

    /// Gets a teacher's public profile by username.
    ///
    /// The stored password hash is dropped here and never reaches a caller.
    ///
    /// # Returns
    /// - `Ok(TeacherProfile)`: Account found
    /// - `Err(AppError::NotFound)`: No account with that username
    pub async fn get_teacher(&self, username: &str) -> Result<TeacherProfile, AppError> {
        let repo = TeacherRepository::new(self.collections.teachers.as_ref());

        let teacher = repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound("Teacher not found".to_string()))?;

        Ok(teacher.into_profile())
    }
}
