//! Calculator Module definition
//!
//! Builds the domain service from configuration and registers the REST facade.

use std::sync::Arc;

use axum::Router;
use calculator_sdk::ArithmeticProvider;

use crate::api::rest::routes;
use crate::config::CalculatorConfig;
use crate::domain::{IterativeFibonacci, Service};

/// Calculator module.
///
/// Owns the domain service and hands it to the REST layer as an
/// `Arc<dyn ArithmeticProvider>`.
pub struct CalculatorModule {
    service: Arc<Service>,
}

impl CalculatorModule {
    /// Create the module and its domain service from configuration.
    #[must_use]
    pub fn new(config: &CalculatorConfig) -> Self {
        tracing::info!("Initializing calculator module");

        let fibonacci = IterativeFibonacci::new(config.max_fibonacci_index);
        let max_fibonacci_index = fibonacci.max_index();
        let service = Arc::new(Service::new(Arc::new(fibonacci)));

        tracing::info!(max_fibonacci_index, "calculator module initialized");
        Self { service }
    }

    /// Domain service backing this module.
    #[must_use]
    pub fn service(&self) -> Arc<Service> {
        Arc::clone(&self.service)
    }

    /// Register the calculator REST routes on `router`.
    ///
    /// When `enable_docs` is set, `/openapi.json` is served as well.
    #[must_use]
    pub fn register_rest(&self, router: Router, enable_docs: bool) -> Router {
        tracing::info!("Registering calculator REST routes");

        let provider: Arc<dyn ArithmeticProvider> = self.service();
        let router = routes::register_routes(router, provider, enable_docs);

        tracing::info!("calculator REST routes registered");
        router
    }
}

impl Default for CalculatorModule {
    fn default() -> Self {
        Self::new(&CalculatorConfig::default())
    }
}
