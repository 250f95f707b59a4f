use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        activity::{ActivityDto, UpdateDescriptionDto},
        api::{ErrorDto, MessageDto},
    },
    server::{
        error::AppError,
        model::activity::ActivityFilter,
        service::activity::ActivityService,
        state::AppState,
        util::parse::{parse_email, parse_schedule_time, parse_weekday},
    },
};

/// Tag for grouping activity endpoints in OpenAPI documentation
pub static ACTIVITY_TAG: &str = "activity";

/// Activity endpoints with their OpenAPI operations.
pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_activities))
        .routes(routes!(get_activity_days))
        .routes(routes!(signup_for_activity))
        .routes(routes!(unregister_from_activity))
        .routes(routes!(update_activity_description))
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ActivityQuery {
    /// Weekday the activity must meet on, e.g. `Monday`
    pub day: Option<String>,
    /// Earliest start time, `HH:MM`
    pub start_time: Option<String>,
    /// Latest end time, `HH:MM`
    pub end_time: Option<String>,
}

impl ActivityQuery {
    fn into_filter(self) -> Result<ActivityFilter, AppError> {
        Ok(ActivityFilter {
            day: self.day.map(parse_weekday).transpose()?,
            start_time: self
                .start_time
                .map(|value| parse_schedule_time("start_time", value))
                .transpose()?,
            end_time: self
                .end_time
                .map(|value| parse_schedule_time("end_time", value))
                .transpose()?,
        })
    }
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    /// Student email address
    pub email: String,
}

/// List activities.
///
/// Returns every activity, optionally narrowed to those meeting on a given day
/// and within a time window. Supplied constraints are combined with AND.
///
/// # Arguments
/// - `state` - Application state containing the collections
/// - `query` - Optional day, start time and end time constraints
///
/// # Returns
/// - `200 OK` - Matching activities in storage order
/// - `400 Bad Request` - Malformed day or time
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    get,
    path = "/api/activities",
    tag = ACTIVITY_TAG,
    params(ActivityQuery),
    responses(
        (status = 200, description = "Successfully retrieved activities", body = Vec<ActivityDto>),
        (status = 400, description = "Invalid day or time", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activities(
    State(state): State<AppState>,
    Query(query): Query<ActivityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = query.into_filter()?;

    let service = ActivityService::new(&state.collections);

    let activities = service.list(filter).await?;

    Ok((
        StatusCode::OK,
        Json(
            activities
                .into_iter()
                .map(|activity| activity.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// List the weekdays on which any activity meets.
///
/// # Returns
/// - `200 OK` - Distinct weekday names, sorted
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    get,
    path = "/api/activities/days",
    tag = ACTIVITY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved days", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activity_days(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = ActivityService::new(&state.collections);

    let days = service.days().await?;

    Ok((StatusCode::OK, Json(days)))
}

/// Sign a student up for an activity.
///
/// # Arguments
/// - `state` - Application state containing the collections
/// - `name` - Activity name
/// - `query` - Student email address
///
/// # Returns
/// - `200 OK` - Student enrolled
/// - `400 Bad Request` - Missing email, already enrolled, or activity full
/// - `404 Not Found` - Unknown activity
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    post,
    path = "/api/activities/{name}/signup",
    tag = ACTIVITY_TAG,
    params(
        ("name" = String, Path, description = "Activity name"),
        EmailQuery
    ),
    responses(
        (status = 200, description = "Successfully signed up", body = MessageDto),
        (status = 400, description = "Already signed up or activity full", body = ErrorDto),
        (status = 404, description = "Activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup_for_activity(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let email = parse_email(query.email)?;

    let service = ActivityService::new(&state.collections);

    service.signup(&name, &email).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Signed up {} for {}", email, name),
        }),
    ))
}

/// Remove a student from an activity.
///
/// # Returns
/// - `200 OK` - Student removed
/// - `400 Bad Request` - Missing email or student not enrolled
/// - `404 Not Found` - Unknown activity
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    delete,
    path = "/api/activities/{name}/unregister",
    tag = ACTIVITY_TAG,
    params(
        ("name" = String, Path, description = "Activity name"),
        EmailQuery
    ),
    responses(
        (status = 200, description = "Successfully unregistered", body = MessageDto),
        (status = 400, description = "Student not signed up", body = ErrorDto),
        (status = 404, description = "Activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unregister_from_activity(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let email = parse_email(query.email)?;

    let service = ActivityService::new(&state.collections);

    service.unregister(&name, &email).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Unregistered {} from {}", email, name),
        }),
    ))
}

/// Replace an activity's description.
///
/// # Returns
/// - `200 OK` - Updated activity
/// - `404 Not Found` - Unknown activity
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    put,
    path = "/api/activities/{name}/description",
    tag = ACTIVITY_TAG,
    params(
        ("name" = String, Path, description = "Activity name")
    ),
    request_body = UpdateDescriptionDto,
    responses(
        (status = 200, description = "Successfully updated description", body = ActivityDto),
        (status = 404, description = "Activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_activity_description(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(payload): Json<UpdateDescriptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ActivityService::new(&state.collections);

    let activity = service
        .update_description(&name, &payload.description)
        .await?;

    Ok((StatusCode::OK, Json(activity.into_dto())))
}
