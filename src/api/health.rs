// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

pub const LIVENESS_MESSAGE: &str = "✅ TetherFlash Backend is running successfully";

/// Service health with the ledger it is bound to.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Configured TRON network (`nile`, `shasta`, `mainnet`)
    pub network: String,
    /// Token symbol
    pub token: String,
}

/// Liveness probe.
///
/// Always returns 200 if the process is running.
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = String, content_type = "text/plain")
    )
)]
pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// Health check. Does not contact the ledger or mail relay.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        network: state.network.name.to_string(),
        token: state.token_symbol.clone(),
    })
}
