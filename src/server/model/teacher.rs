//! Teacher account domain models.

use serde::{Deserialize, Serialize};
use storage::{
    bson::{self, Document},
    StorageError,
};

use crate::model::teacher::TeacherDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeacherRole {
    Teacher,
    Admin,
}

impl TeacherRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Teacher => "teacher",
            Self::Admin => "admin",
        }
    }
}

/// Stored teacher account, including the Argon2 password hash.
///
/// The document identity duplicates `username` and is not decoded separately.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Teacher {
    pub username: String,
    pub display_name: String,
    /// PHC-format Argon2 hash, never the plaintext.
    pub password: String,
    pub role: TeacherRole,
}

impl Teacher {
    /// Decodes a stored teacher document.
    ///
    /// # Returns
    /// - `Ok(Teacher)` - Document decoded
    /// - `Err(StorageError::Decode)` - Missing field or unknown role
    pub fn from_document(document: Document) -> Result<Self, StorageError> {
        Ok(bson::from_document(document)?)
    }

    /// Drops the credential, leaving what may be shown to clients.
    pub fn into_profile(self) -> TeacherProfile {
        TeacherProfile {
            username: self.username,
            display_name: self.display_name,
            role: self.role,
        }
    }
}

/// Teacher account without its credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherProfile {
    pub username: String,
    pub display_name: String,
    pub role: TeacherRole,
}

impl TeacherProfile {
    pub fn into_dto(self) -> TeacherDto {
        TeacherDto {
            username: self.username,
            display_name: self.display_name,
            role: self.role.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::bson::doc;

    #[test]
    fn decodes_role_and_drops_password_from_profile() {
        let document = doc! {
            "_id": "principal",
            "username": "principal",
            "display_name": "Principal Martinez",
            "password": "$argon2id$v=19$placeholder",
            "role": "admin"
        };

        let teacher = Teacher::from_document(document).unwrap();
        assert_eq!(teacher.role, TeacherRole::Admin);

        let dto = teacher.into_profile().into_dto();
        assert_eq!(
            dto,
            TeacherDto {
                username: "principal".to_string(),
                display_name: "Principal Martinez".to_string(),
                role: "admin".to_string(),
            }
        );
    }

    #[test]
    fn rejects_unknown_role() {
        let document = doc! {
            "_id": "janitor",
            "username": "janitor",
            "display_name": "Mr. Filch",
            "password": "x",
            "role": "caretaker"
        };

        assert!(Teacher::from_document(document).is_err());
    }
}
