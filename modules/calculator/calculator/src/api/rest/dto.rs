//! REST DTOs for calculator module
//!
//! These types are transport-specific (serde + utoipa for REST/OpenAPI).

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query operands for the binary arithmetic endpoints.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OperandsQuery {
    /// First operand
    pub a: i64,
    /// Second operand
    pub b: i64,
}

/// Query for the Fibonacci endpoint.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FibonacciQuery {
    /// Zero-based Fibonacci index
    pub n: i64,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
