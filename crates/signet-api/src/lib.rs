//! # signet-api: Axum Transport for the Signet Signing Service
//!
//! A thin adapter between HTTP and the two core operations in
//! `signet-crypto`. Route handlers validate an explicit request struct,
//! call the core, and frame the result; no signing logic lives here.
//!
//! ## Routes
//!
//! - `POST /v1/sign`: sign a text payload, returning a base64 signature
//! - `GET  /health`: liveness probe (unauthenticated)
//!
//! ## Architecture
//!
//! - The private key is loaded once into [`AppState`] at startup and
//!   shared read-only across requests. Misconfigured keys fail the
//!   process before it ever listens.
//! - All errors map to structured HTTP responses via [`AppError`].
//! - Requests are traced through `tower_http::trace::TraceLayer`.

pub mod error;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::AppState;

use axum::Router;
use tower_http::trace::TraceLayer;

/// Assemble the application router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::sign::router())
        .merge(routes::health::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
