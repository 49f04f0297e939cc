//! `OpenAPI` document for the calculator REST API

use axum::Json;
use utoipa::OpenApi;

use super::dto::HealthResponse;
use super::handlers;
use super::problem::Problem;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calculator API",
        description = "Integer arithmetic with plain-text results"
    ),
    paths(
        handlers::add,
        handlers::subtract,
        handlers::multiply,
        handlers::divide,
        handlers::fibonacci,
        handlers::health
    ),
    components(schemas(Problem, HealthResponse)),
    tags(
        (name = "calculator", description = "Arithmetic operations"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

/// Handler for GET /openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
