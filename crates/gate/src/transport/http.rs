// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP handlers for the token service.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header::CACHE_CONTROL;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::issuer::TokenIssuer;
use crate::state::GateState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Whether all LiveKit settings are present.
    pub configured: bool,
}

/// `GET /api/v1/health`
pub async fn health(State(s): State<Arc<GateState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "running".to_owned(),
        configured: s.config.missing_credential().is_none(),
    })
}

/// `GET /api/connection-details` — mint a token for a fresh participant and room.
pub async fn connection_details(State(s): State<Arc<GateState>>) -> impl IntoResponse {
    let result = TokenIssuer::from_config(&s.config, &s.dispatch).and_then(|issuer| {
        issuer.connection_details(&s.config.participant_prefix, &s.config.room_prefix)
    });

    match result {
        Ok(details) => ([(CACHE_CONTROL, "no-store")], Json(details)).into_response(),
        Err(e) => {
            tracing::error!(code = %e.code(), err = %e, "failed to issue connection details");
            e.code().to_http_response(e.to_string()).into_response()
        }
    }
}
