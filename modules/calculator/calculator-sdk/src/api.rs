//! Calculator API traits
//!
//! Contract traits for the calculator service and its Fibonacci collaborator.

use crate::error::CalculatorError;

/// Calculator API trait
///
/// Stateless arithmetic over 64-bit signed integers. `add`, `subtract` and
/// `multiply` are total and wrap on overflow; `divide` rejects a zero divisor.
///
/// The REST facade receives this as `Arc<dyn ArithmeticProvider>`, so any
/// implementation (including test stubs) can be plugged in.
pub trait ArithmeticProvider: Send + Sync {
    /// Return `a + b`.
    fn add(&self, a: i64, b: i64) -> i64;

    /// Return `a - b`.
    fn subtract(&self, a: i64, b: i64) -> i64;

    /// Return `a * b`.
    fn multiply(&self, a: i64, b: i64) -> i64;

    /// Return the floating-point quotient `a / b`.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidArgument`] when `b == 0`.
    fn divide(&self, a: i64, b: i64) -> Result<f64, CalculatorError>;

    /// Return the `n`-th Fibonacci number.
    ///
    /// # Errors
    /// Returns whatever the underlying [`FibonacciCalculator`] rejects.
    fn fibonacci(&self, n: i64) -> Result<i64, CalculatorError>;
}

/// Fibonacci collaborator.
///
/// The valid domain of `n` and overflow behavior belong to the implementation.
pub trait FibonacciCalculator: Send + Sync {
    /// Compute the `n`-th Fibonacci number.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidArgument`] when `n` is outside the
    /// domain this implementation supports.
    fn calculate(&self, n: i64) -> Result<i64, CalculatorError>;
}
