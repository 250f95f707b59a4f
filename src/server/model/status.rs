use storage::Backend;

use crate::model::status::StatusDto;

/// Active backend and document counts, reported by the status endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageStatus {
    pub backend: Backend,
    pub activities: u64,
    pub teachers: u64,
}

impl StorageStatus {
    pub fn into_dto(self) -> StatusDto {
        StatusDto {
            backend: self.backend.to_string(),
            activities: self.activities,
            teachers: self.teachers,
        }
    }
}
