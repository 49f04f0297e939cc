//! REST handlers for calculator module
//!
//! Each handler pulls the provider from request extensions, parses the query
//! string, and renders the result as plain text. Errors become Problem
//! responses.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Extension, Query};
use axum::http::Uri;
use calculator_sdk::ArithmeticProvider;

use super::dto::{FibonacciQuery, HealthResponse, OperandsQuery};
use super::error::{calculator_error_to_problem, query_rejection_to_problem};
use super::problem::Problem;

type Provider = Extension<Arc<dyn ArithmeticProvider>>;

fn parse_query<T>(query: Result<Query<T>, QueryRejection>, uri: &Uri) -> Result<T, Problem> {
    query
        .map(|Query(q)| q)
        .map_err(|rejection| query_rejection_to_problem(&rejection, uri.path()))
}

/// Render a float in shortest round-trip form as plain decimal, always with a
/// fractional part (`2.0`, `0.0000001`, `10000000000000000.0`).
#[must_use]
pub fn format_float(value: f64) -> String {
    let mut buffer = ryu::Buffer::new();
    let shortest = buffer.format(value);
    if !shortest.contains('e') {
        return shortest.to_owned();
    }

    // ryu switches to exponent form outside [1e-5, 1e16); `Display` never does.
    let plain = value.to_string();
    if plain.contains('.') {
        plain
    } else {
        format!("{plain}.0")
    }
}

/// Handler for GET /add
#[utoipa::path(
    get,
    path = "/add",
    tag = "calculator",
    params(OperandsQuery),
    responses(
        (status = 200, description = "Sum of a and b", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing or malformed operands", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn add(
    Extension(provider): Provider,
    uri: Uri,
    query: Result<Query<OperandsQuery>, QueryRejection>,
) -> Result<String, Problem> {
    let OperandsQuery { a, b } = parse_query(query, &uri)?;
    Ok(provider.add(a, b).to_string())
}

/// Handler for GET /subtract
#[utoipa::path(
    get,
    path = "/subtract",
    tag = "calculator",
    params(OperandsQuery),
    responses(
        (status = 200, description = "Difference a - b", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing or malformed operands", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn subtract(
    Extension(provider): Provider,
    uri: Uri,
    query: Result<Query<OperandsQuery>, QueryRejection>,
) -> Result<String, Problem> {
    let OperandsQuery { a, b } = parse_query(query, &uri)?;
    Ok(provider.subtract(a, b).to_string())
}

/// Handler for GET /multiply
#[utoipa::path(
    get,
    path = "/multiply",
    tag = "calculator",
    params(OperandsQuery),
    responses(
        (status = 200, description = "Product of a and b", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing or malformed operands", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn multiply(
    Extension(provider): Provider,
    uri: Uri,
    query: Result<Query<OperandsQuery>, QueryRejection>,
) -> Result<String, Problem> {
    let OperandsQuery { a, b } = parse_query(query, &uri)?;
    Ok(provider.multiply(a, b).to_string())
}

/// Handler for GET /divide
///
/// A zero divisor is answered with 400 and a Problem body.
#[utoipa::path(
    get,
    path = "/divide",
    tag = "calculator",
    params(OperandsQuery),
    responses(
        (status = 200, description = "Floating-point quotient a / b", body = String, content_type = "text/plain"),
        (status = 400, description = "Division by zero, or missing or malformed operands", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn divide(
    Extension(provider): Provider,
    uri: Uri,
    query: Result<Query<OperandsQuery>, QueryRejection>,
) -> Result<String, Problem> {
    let OperandsQuery { a, b } = parse_query(query, &uri)?;
    let quotient = provider
        .divide(a, b)
        .map_err(|e| calculator_error_to_problem(&e, uri.path()))?;
    Ok(format_float(quotient))
}

/// Handler for GET /fibonacci
#[utoipa::path(
    get,
    path = "/fibonacci",
    tag = "calculator",
    params(FibonacciQuery),
    responses(
        (status = 200, description = "The n-th Fibonacci number", body = String, content_type = "text/plain"),
        (status = 400, description = "Index rejected, or missing or malformed n", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn fibonacci(
    Extension(provider): Provider,
    uri: Uri,
    query: Result<Query<FibonacciQuery>, QueryRejection>,
) -> Result<String, Problem> {
    let FibonacciQuery { n } = parse_query(query, &uri)?;
    let value = provider
        .fibonacci(n)
        .map_err(|e| calculator_error_to_problem(&e, uri.path()))?;
    Ok(value.to_string())
}

/// Handler for GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is alive", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
    })
}
