use serde::{Deserialize, Serialize};

use crate::domain::fibonacci::MAX_I64_FIBONACCI_INDEX;

/// Configuration for the `calculator` module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Largest index accepted by the default Fibonacci collaborator.
    /// Values above 92 are clamped, since F(93) does not fit in `i64`.
    #[serde(default = "default_max_fibonacci_index")]
    pub max_fibonacci_index: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_fibonacci_index: default_max_fibonacci_index(),
        }
    }
}

fn default_max_fibonacci_index() -> u32 {
    MAX_I64_FIBONACCI_INDEX
}
