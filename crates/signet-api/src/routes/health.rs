//! # Health Probe
//!
//! Unauthenticated liveness endpoint. Readiness is implied by liveness:
//! the signing key is loaded before the listener starts, so a process
//! that answers at all is ready to sign.

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
