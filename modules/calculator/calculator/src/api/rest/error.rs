use axum::extract::rejection::QueryRejection;
use calculator_sdk::CalculatorError;

use super::problem::{Problem, bad_request};

pub const INVALID_ARGUMENT_CODE: &str = "calculator.invalid_argument";
pub const INVALID_QUERY_CODE: &str = "calculator.invalid_query";

fn current_trace_id() -> Option<String> {
    tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string())
}

fn with_trace(problem: Problem) -> Problem {
    match current_trace_id() {
        Some(trace_id) => problem.with_trace_id(trace_id),
        None => problem,
    }
}

/// Map a calculator error to an RFC 9457 Problem.
pub fn calculator_error_to_problem(e: &CalculatorError, instance: &str) -> Problem {
    match e {
        CalculatorError::InvalidArgument(message) => {
            tracing::debug!(error = %e, instance, "rejecting invalid argument");
            with_trace(
                bad_request(message.clone())
                    .with_code(INVALID_ARGUMENT_CODE)
                    .with_instance(instance),
            )
        }
    }
}

/// Map a malformed or incomplete query string to an RFC 9457 Problem.
pub fn query_rejection_to_problem(rejection: &QueryRejection, instance: &str) -> Problem {
    tracing::debug!(error = %rejection, instance, "rejecting malformed query");
    with_trace(
        bad_request(rejection.body_text())
            .with_code(INVALID_QUERY_CODE)
            .with_instance(instance),
    )
}

impl From<CalculatorError> for Problem {
    fn from(e: CalculatorError) -> Self {
        calculator_error_to_problem(&e, "/")
    }
}
