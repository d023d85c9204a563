// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token balance lookups.

use std::sync::Arc;

use tracing::{debug, error};

use super::{call_external, GatewayError, GatewaySettings};
use crate::blockchain::{to_display_number, LedgerClient};

pub struct BalanceGateway {
    ledger: Arc<dyn LedgerClient>,
    settings: GatewaySettings,
}

impl BalanceGateway {
    pub fn new(ledger: Arc<dyn LedgerClient>, settings: GatewaySettings) -> Self {
        Self { ledger, settings }
    }

    /// Balance of `owner` in display units; the relay account when `owner`
    /// is absent or blank.
    pub async fn get_balance(&self, owner: Option<String>) -> Result<f64, GatewayError> {
        let owner = match owner.map(|o| o.trim().to_string()).filter(|o| !o.is_empty()) {
            Some(owner) => owner,
            None => self
                .ledger
                .default_owner()
                .map_err(|e| GatewayError::External(e.to_string()))?,
        };

        let token = &self.settings.token;
        let raw = call_external(
            self.settings.external_timeout,
            self.ledger.token_balance(&token.contract, &owner),
        )
        .await
        .inspect_err(|e| error!(%owner, error = %e, "Balance query failed"))?;

        let balance = to_display_number(raw, token.decimals);
        debug!(%owner, %raw, balance, "Balance fetched");
        Ok(balance)
    }
}
