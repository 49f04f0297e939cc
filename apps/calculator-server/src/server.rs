//! HTTP host: router assembly, middleware stack and serve loop.

use std::time::Duration;

use anyhow::Context;
use axum::Router;
use axum::http::{HeaderName, StatusCode};
use calculator::CalculatorModule;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use crate::config::{AppConfig, ServerConfig};
use crate::signals;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the calculator router with the full middleware stack applied.
#[must_use]
pub fn build_router(config: &AppConfig) -> Router {
    let module = CalculatorModule::new(&config.calculator);
    let router = module.register_rest(Router::new(), config.server.enable_docs);
    apply_middleware_stack(router, &config.server)
}

/// Apply trace layer: one `http_request` span per request.
fn apply_trace_layer(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &axum::http::Request<axum::body::Body>| {
                let rid = req
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");

                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    version = ?req.version(),
                    module = "calculator",
                    request_id = %rid,
                    status = Empty,
                    latency_ms = Empty
                )
            })
            .on_response(
                |res: &axum::http::Response<axum::body::Body>,
                 latency: Duration,
                 span: &tracing::Span| {
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", latency.as_millis());
                    tracing::debug!("request completed");
                },
            ),
    )
}

/// Apply all middleware layers to a router.
///
/// Layers are registered innermost first. At runtime requests flow through
/// `SetRequestId` -> `PropagateRequestId` -> Trace -> Timeout -> Router.
fn apply_middleware_stack(mut router: Router, config: &ServerConfig) -> Router {
    // 4) Timeout
    router = router.layer(TimeoutLayer::with_status_code(
        StatusCode::GATEWAY_TIMEOUT,
        Duration::from_secs(config.request_timeout_secs),
    ));

    // 3) Trace
    router = apply_trace_layer(router);

    // 2) PropagateRequestId (copy request ID to response headers)
    let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));

    // 1) SetRequestId (registered last, runs first)
    router.layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
}

/// Bind, serve until a shutdown signal arrives, then drain.
///
/// # Errors
/// Returns an error if the bind address is invalid, the socket cannot be
/// bound, or the server fails.
pub async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    let addr = config.server.socket_addr()?;
    let router = build_router(&config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("HTTP server bound on {}", listener.local_addr()?);

    let shutdown = async {
        if let Err(e) = signals::wait_for_shutdown().await {
            tracing::warn!(
                error = %e,
                "shutdown: signal waiter failed, falling back to ctrl_c()"
            );
            let _ = tokio::signal::ctrl_c().await;
        }
        tracing::info!("HTTP server shutting down gracefully");
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
