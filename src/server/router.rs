//! Route table, OpenAPI document and cross-origin policy.

use axum::{
    http::{header::CONTENT_TYPE, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{activity, status, teacher},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mergington High School Activities API",
        description = "Browse extracurricular activities and manage student signups"
    ),
    tags(
        (name = "activity", description = "Activity catalog and enrollment"),
        (name = "teacher", description = "Teacher accounts"),
        (name = "status", description = "Storage backend status")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(activity::routes())
        .merge(teacher::routes())
        .merge(status::routes())
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(Any);

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(cors)
}
