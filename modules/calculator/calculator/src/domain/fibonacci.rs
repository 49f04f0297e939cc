//! Default Fibonacci collaborator

use calculator_sdk::{CalculatorError, FibonacciCalculator};

/// Largest index whose Fibonacci number fits in `i64`.
pub const MAX_I64_FIBONACCI_INDEX: u32 = 92;

/// Iterative Fibonacci with F(0) = 0, F(1) = 1 and an upper bound on `n`.
#[derive(Debug, Clone, Copy)]
pub struct IterativeFibonacci {
    max_index: u32,
}

impl IterativeFibonacci {
    /// Create a calculator accepting indices up to `max_index`, clamped to
    /// [`MAX_I64_FIBONACCI_INDEX`].
    #[must_use]
    pub fn new(max_index: u32) -> Self {
        Self {
            max_index: max_index.min(MAX_I64_FIBONACCI_INDEX),
        }
    }

    #[must_use]
    pub fn max_index(&self) -> u32 {
        self.max_index
    }
}

impl Default for IterativeFibonacci {
    fn default() -> Self {
        Self::new(MAX_I64_FIBONACCI_INDEX)
    }
}

impl FibonacciCalculator for IterativeFibonacci {
    fn calculate(&self, n: i64) -> Result<i64, CalculatorError> {
        if n < 0 {
            return Err(CalculatorError::invalid_argument(format!(
                "Fibonacci index must be non-negative, got {n}"
            )));
        }
        if n > i64::from(self.max_index) {
            return Err(CalculatorError::invalid_argument(format!(
                "Fibonacci index {n} exceeds the maximum of {}",
                self.max_index
            )));
        }
        if n == 0 {
            return Ok(0);
        }

        // max_index <= MAX_I64_FIBONACCI_INDEX, so every term fits in i64.
        let (mut prev, mut curr) = (0_i64, 1_i64);
        for _ in 1..n {
            (prev, curr) = (curr, prev + curr);
        }
        Ok(curr)
    }
}
