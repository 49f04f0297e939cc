//! Error type for calculator operations

/// Message carried by the division-by-zero error.
pub const DIVISION_BY_ZERO: &str = "Division by zero is not allowed.";

/// Error type for calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// An operand is outside the operation's domain
    #[error("{0}")]
    InvalidArgument(String),
}

impl CalculatorError {
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    #[must_use]
    pub fn division_by_zero() -> Self {
        Self::InvalidArgument(DIVISION_BY_ZERO.to_owned())
    }
}
