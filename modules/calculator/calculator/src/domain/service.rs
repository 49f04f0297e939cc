//! Domain service for calculator
//!
//! Contains the core arithmetic logic. Fibonacci lookups are delegated to the
//! injected collaborator.

use std::sync::Arc;

use calculator_sdk::{ArithmeticProvider, CalculatorError, FibonacciCalculator};
use tracing::debug;

use super::fibonacci::IterativeFibonacci;

/// Domain service that performs arithmetic operations.
///
/// Stateless apart from the Fibonacci collaborator, which is shared
/// read-only. Integer operations wrap on overflow.
#[derive(Clone)]
pub struct Service {
    fibonacci: Arc<dyn FibonacciCalculator>,
}

impl Service {
    /// Create a new service delegating Fibonacci lookups to `fibonacci`.
    #[must_use]
    pub fn new(fibonacci: Arc<dyn FibonacciCalculator>) -> Self {
        Self { fibonacci }
    }
}

impl Default for Service {
    fn default() -> Self {
        Self::new(Arc::new(IterativeFibonacci::default()))
    }
}

impl ArithmeticProvider for Service {
    fn add(&self, a: i64, b: i64) -> i64 {
        debug!(a, b, "performing addition");
        a.wrapping_add(b)
    }

    fn subtract(&self, a: i64, b: i64) -> i64 {
        debug!(a, b, "performing subtraction");
        a.wrapping_sub(b)
    }

    fn multiply(&self, a: i64, b: i64) -> i64 {
        debug!(a, b, "performing multiplication");
        a.wrapping_mul(b)
    }

    // The quotient is a float by contract; operands beyond 2^53 round.
    #[allow(clippy::cast_precision_loss)]
    fn divide(&self, a: i64, b: i64) -> Result<f64, CalculatorError> {
        debug!(a, b, "performing division");
        if b == 0 {
            return Err(CalculatorError::division_by_zero());
        }
        Ok(a as f64 / b as f64)
    }

    fn fibonacci(&self, n: i64) -> Result<i64, CalculatorError> {
        debug!(n, "delegating fibonacci lookup");
        self.fibonacci.calculate(n)
    }
}
