// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token transfers from the relay account.

use std::sync::Arc;

use tracing::{error, info, warn};

use super::{call_external, GatewayError, GatewaySettings};
use crate::{
    blockchain::{to_token_units, LedgerClient},
    models::TransferRequest,
};

pub const TRANSFER_FIELDS_REQUIRED: &str = "recipient and amount required";

pub struct TransferGateway {
    ledger: Arc<dyn LedgerClient>,
    settings: GatewaySettings,
}

impl TransferGateway {
    pub fn new(ledger: Arc<dyn LedgerClient>, settings: GatewaySettings) -> Self {
        Self { ledger, settings }
    }

    /// Validate `request`, scale its amount to base units and submit exactly
    /// one transfer. Returns the transaction id, or `"unknown"` when the
    /// ledger acknowledged without one.
    pub async fn submit_transfer(&self, request: TransferRequest) -> Result<String, GatewayError> {
        let (recipient, amount) = match (request.recipient(), request.amount()) {
            (Some(recipient), Some(amount)) => (recipient.to_string(), amount),
            _ => return Err(GatewayError::Validation(TRANSFER_FIELDS_REQUIRED.to_string())),
        };

        let token = &self.settings.token;
        let units = to_token_units(&amount, token.decimals)
            .map_err(|e| GatewayError::Validation(e.to_string()))?;

        info!(
            %recipient,
            %amount,
            %units,
            token = %token.symbol,
            "Submitting token transfer"
        );

        let ack = call_external(
            self.settings.external_timeout,
            self.ledger
                .transfer_token(&token.contract, &recipient, units, self.settings.fee_limit),
        )
        .await
        .inspect_err(|e| error!(%recipient, error = %e, "Token transfer failed"))?;

        let tx_hash = ack.tx_hash();
        match ack.transaction_id() {
            Some(tx_id) => info!(
                %recipient,
                %tx_hash,
                explorer = %self.settings.network.transaction_url(tx_id),
                "Token transfer submitted"
            ),
            None => warn!(?ack, %recipient, "Ledger acknowledged transfer without a transaction id"),
        }
        Ok(tx_hash)
    }
}
