use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{api::ErrorDto, status::StatusDto},
    server::{error::AppError, service::status::StatusService, state::AppState},
};

/// Tag for grouping status endpoints in OpenAPI documentation
pub static STATUS_TAG: &str = "status";

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(get_status))
}

/// Report which storage backend is active.
///
/// A `memory` backend means MongoDB was unreachable at startup and every change
/// will be lost on restart.
///
/// # Returns
/// - `200 OK` - Backend name and document counts
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    get,
    path = "/api/status",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Successfully retrieved status", body = StatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_status(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = StatusService::new(&state.collections);

    let status = service.get_status().await?;

    Ok((StatusCode::OK, Json(status.into_dto())))
}
