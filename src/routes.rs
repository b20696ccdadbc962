//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /check-domain?domain=<name>` - combined deep-link configuration report
//! - any other path                    - plain-text 404
//!
//! # Middleware
//!
//! - **Cross-origin** - permissive headers on every response, `OPTIONS`
//!   answered directly
//! - **Tracing** - structured request/response logging

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Router, middleware};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::api::handlers::check_domain_handler;
use crate::api::middleware::cors;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/check-domain", get(check_domain_handler))
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(cors::layer))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
