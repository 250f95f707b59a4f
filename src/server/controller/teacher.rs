use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{api::ErrorDto, teacher::TeacherDto},
    server::{error::AppError, service::teacher::TeacherService, state::AppState},
};

/// Tag for grouping teacher endpoints in OpenAPI documentation
pub static TEACHER_TAG: &str = "teacher";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(get_teacher))
}

/// Get a teacher's public profile.
///
/// # Returns
/// - `200 OK` - Username, display name and role; never the password hash
/// - `404 Not Found` - Unknown username
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    get,
    path = "/api/teachers/{username}",
    tag = TEACHER_TAG,
    params(
        ("username" = String, Path, description = "Teacher username")
    ),
    responses(
        (status = 200, description = "Successfully retrieved teacher", body = TeacherDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teacher(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = TeacherService::new(&state.collections);

    let teacher = service.get_teacher(&username).await?;

    Ok((StatusCode::OK, Json(teacher.into_dto())))
}
