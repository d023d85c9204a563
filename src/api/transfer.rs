// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, Json};

use super::extract::Payload;
use crate::{
    error::{ApiError, ErrorBody},
    models::{TransferRequest, TransferResult},
    state::AppState,
};

/// Send tokens from the relay account.
///
/// The amount is a human-readable decimal; it is scaled to the token's base
/// units before submission.
#[utoipa::path(
    post,
    path = "/send-usdt",
    tag = "Transfers",
    request_body(content = TransferRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Transfer submitted", body = TransferResult),
        (status = 400, description = "Missing recipient or amount", body = ErrorBody),
        (status = 500, description = "Ledger rejected or failed the transfer", body = ErrorBody)
    )
)]
pub async fn send_usdt(
    State(state): State<AppState>,
    Payload(request): Payload<TransferRequest>,
) -> Result<Json<TransferResult>, ApiError> {
    let tx_hash = state.transfers.submit_transfer(request).await?;
    Ok(Json(TransferResult::submitted(tx_hash)))
}
