// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token balance endpoint.

use axum::{extract::State, Json};

use super::extract::QueryParams;
use crate::{
    error::{ApiError, ErrorBody},
    models::{BalanceQuery, BalanceResult},
    state::AppState,
};

/// Get the token balance of the relay account, or of `address` when given.
#[utoipa::path(
    get,
    path = "/balance",
    tag = "Balance",
    params(BalanceQuery),
    responses(
        (status = 200, description = "Balance retrieved", body = BalanceResult),
        (status = 400, description = "Malformed query string", body = ErrorBody),
        (status = 500, description = "Ledger unavailable", body = ErrorBody)
    )
)]
pub async fn get_balance(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<BalanceQuery>,
) -> Result<Json<BalanceResult>, ApiError> {
    let balance = state.balances.get_balance(query.address).await?;
    Ok(Json(BalanceResult::of(balance)))
}
