//! Teacher factory for creating test teacher documents.

use storage::{
    bson::{doc, Document},
    DocumentCollection, StorageError, ID_FIELD,
};

use crate::factory::helpers::next_id;

/// Well-formed Argon2id PHC string stored by factories in place of a real hash.
pub const PLACEHOLDER_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$dGVzdHNhbHQ$dGVzdGhhc2h0ZXN0aGFzaHRlc3RoYXNoMDE";

/// Factory for creating test teachers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::teacher::TeacherFactory;
///
/// let teacher = TeacherFactory::new(test.teachers())
///     .username("mchen")
///     .role("admin")
///     .build()
///     .await?;
/// ```
pub struct TeacherFactory<'a> {
    collection: &'a dyn DocumentCollection,
    username: String,
    display_name: String,
    password: String,
    role: String,
}

impl<'a> TeacherFactory<'a> {
    /// Creates a new TeacherFactory with default values.
    ///
    /// Defaults:
    /// - username: `"teacher{id}"` where id is auto-incremented
    /// - display_name: `"Teacher {id}"`
    /// - password: `PLACEHOLDER_PASSWORD_HASH`
    /// - role: `"teacher"`
    pub fn new(collection: &'a dyn DocumentCollection) -> Self {
        let id = next_id();
        Self {
            collection,
            username: format!("teacher{}", id),
            display_name: format!("Teacher {}", id),
            password: PLACEHOLDER_PASSWORD_HASH.to_string(),
            role: "teacher".to_string(),
        }
    }

    /// Sets the username, which is also the identity.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the display name.
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Sets the role string, normally `"teacher"` or `"admin"`.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builds and inserts the teacher document.
    ///
    /// # Returns
    /// - `Ok(Document)` - The inserted document
    /// - `Err(StorageError)` - Insert failed
    pub async fn build(self) -> Result<Document, StorageError> {
        let document = doc! {
            ID_FIELD: self.username.as_str(),
            "username": self.username.as_str(),
            "display_name": self.display_name,
            "password": self.password,
            "role": self.role,
        };
        self.collection.insert_one(document.clone()).await?;
        Ok(document)
    }
}

/// Creates a teacher with default values.
///
/// Shorthand for `TeacherFactory::new(collection).build().await`.
pub async fn create_teacher(collection: &dyn DocumentCollection) -> Result<Document, StorageError> {
    TeacherFactory::new(collection).build().await
}
