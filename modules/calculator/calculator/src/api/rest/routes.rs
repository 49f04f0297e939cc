//! Route registration for calculator module

use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};
use calculator_sdk::ArithmeticProvider;

use super::{handlers, openapi};

/// Register all REST routes for calculator module.
///
/// # Arguments
/// * `router` - Axum router to add routes to
/// * `provider` - Arithmetic provider injected into every handler
/// * `enable_docs` - Serve the `OpenAPI` document at `/openapi.json`
#[must_use]
pub fn register_routes(
    router: Router,
    provider: Arc<dyn ArithmeticProvider>,
    enable_docs: bool,
) -> Router {
    // GET /add, /subtract, /multiply, /divide ?a=&b= - plain-text result
    let router = router
        .route("/add", get(handlers::add))
        .route("/subtract", get(handlers::subtract))
        .route("/multiply", get(handlers::multiply))
        .route("/divide", get(handlers::divide))
        // GET /fibonacci?n= - delegated to the Fibonacci collaborator
        .route("/fibonacci", get(handlers::fibonacci))
        .route("/health", get(handlers::health));

    let router = if enable_docs {
        router.route("/openapi.json", get(openapi::openapi_json))
    } else {
        router
    };

    // Add provider as Extension
    router.layer(Extension(provider))
}
