use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a teacher account. The password hash is never included.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeacherDto {
    pub username: String,
    pub display_name: String,
    pub role: String,
}
