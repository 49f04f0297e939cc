//! Domain layer for calculator module
//!
//! Contains the arithmetic logic and the default Fibonacci collaborator.

pub mod fibonacci;
pub mod service;

pub use fibonacci::IterativeFibonacci;
pub use service::Service;
