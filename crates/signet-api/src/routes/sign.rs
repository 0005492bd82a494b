//! # Sign Route
//!
//! `POST /v1/sign` adapts one HTTP request to the two core calls: the
//! key is already loaded in [`AppState`], so the handler digests and
//! signs the payload, then frames the signature as base64 JSON.
//!
//! The request body is an explicit struct validated before anything
//! reaches the core. A malformed or missing body never touches the key.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use signet_core::SignatureBytes;

use crate::error::AppError;
use crate::state::AppState;

/// Request body for `POST /v1/sign`.
#[derive(Debug, Deserialize)]
pub struct SignRequest {
    /// UTF-8 text payload to sign.
    pub data: String,
}

/// Response body for `POST /v1/sign`.
#[derive(Debug, Serialize)]
pub struct SignResponse {
    /// PKCS#1 v1.5 signature over SHA-256 of the payload, base64-encoded.
    pub signature: SignatureBytes,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/sign", post(sign))
}

/// Sign the request payload with the service key.
async fn sign(
    State(state): State<AppState>,
    body: Result<Json<SignRequest>, JsonRejection>,
) -> Result<Json<SignResponse>, AppError> {
    let Json(request) = body.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let signature = signet_crypto::sign(state.key(), request.data.as_bytes()).map_err(|err| {
        tracing::error!(error = %err, "signing operation failed");
        AppError::from(err)
    })?;

    tracing::debug!(
        payload_bytes = request.data.len(),
        signature_bytes = signature.len(),
        "payload signed"
    );
    Ok(Json(SignResponse { signature }))
}
