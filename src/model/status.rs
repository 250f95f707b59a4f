use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StatusDto {
    /// Active storage backend, `"mongodb"` or `"memory"`
    pub backend: String,
    pub activities: u64,
    pub teachers: u64,
}
