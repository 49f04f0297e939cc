//! Calculator SDK
//!
//! This crate provides everything needed to consume or implement the calculator:
//! - Provider trait (`ArithmeticProvider`)
//! - Fibonacci collaborator trait (`FibonacciCalculator`)
//! - Error type (`CalculatorError`)
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use calculator_sdk::ArithmeticProvider;
//!
//! let provider: Arc<dyn ArithmeticProvider> = Arc::new(calculator::Service::default());
//! assert_eq!(provider.add(2, 3), 5);
//! let quotient = provider.divide(6, 3)?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAITS ===
mod api;
pub use api::{ArithmeticProvider, FibonacciCalculator};

// === ERRORS ===
mod error;
pub use error::{CalculatorError, DIVISION_BY_ZERO};
