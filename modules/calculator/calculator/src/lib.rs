//! Calculator Module
//!
//! A stateless arithmetic service (add, subtract, multiply, divide, Fibonacci)
//! exposed through a thin REST facade.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core arithmetic logic, implements `ArithmeticProvider`
//! - `domain/fibonacci.rs` - Default Fibonacci collaborator
//! - `api/rest/` - Routes, handlers, DTOs and Problem mapping
//! - `module.rs` - Module construction and route registration
//!
//! Consumers that only need the contract should depend on `calculator-sdk`.

// === MODULE DEFINITION ===
mod module;
pub use module::CalculatorModule;

pub mod config;
pub use config::CalculatorConfig;

// === PUBLIC EXPORTS ===
pub mod domain;
pub use domain::{IterativeFibonacci, Service};

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
