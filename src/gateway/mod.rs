// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Gateways
//!
//! Request-level operations behind the HTTP handlers. Each gateway validates
//! its input, calls one external collaborator (ledger or mail relay) and turns
//! the outcome into a value or a [`GatewayError`].
//!
//! Collaborators are injected as trait objects so handlers can be exercised
//! with stubs.

use std::{fmt::Display, future::Future, time::Duration};

use crate::{
    blockchain::{NetworkConfig, USDT_TOKEN},
    config::RelayConfig,
};

pub mod balance;
pub mod notification;
pub mod transfer;

pub use balance::BalanceGateway;
pub use notification::NotificationGateway;
pub use transfer::TransferGateway;

/// Outcome classes surfaced to clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// Missing or unusable input. Nothing was sent externally.
    #[error("{0}")]
    Validation(String),

    /// The ledger or mail relay failed; carries its message verbatim.
    #[error("{0}")]
    External(String),
}

/// Token the relay operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSettings {
    pub contract: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Settings shared by the gateways.
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub network: NetworkConfig,
    pub token: TokenSettings,
    pub fee_limit: u64,
    /// Upper bound on each external call; `None` waits indefinitely.
    pub external_timeout: Option<Duration>,
    pub sender_name: String,
}

impl GatewaySettings {
    pub fn from_config(config: &RelayConfig) -> Self {
        Self {
            network: config.network.clone(),
            token: TokenSettings {
                contract: config.token_contract.clone(),
                symbol: USDT_TOKEN.symbol.to_string(),
                decimals: USDT_TOKEN.decimals,
            },
            fee_limit: config.fee_limit,
            external_timeout: config.external_timeout,
            sender_name: config.mail.sender_name.clone(),
        }
    }
}

/// Await an external call, bounded by `timeout` when set.
pub(crate) async fn call_external<T, E, F>(
    timeout: Option<Duration>,
    call: F,
) -> Result<T, GatewayError>
where
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    let outcome = match timeout {
        Some(limit) => tokio::time::timeout(limit, call).await.map_err(|_| {
            GatewayError::External(format!(
                "External call timed out after {}s",
                limit.as_secs_f64()
            ))
        })?,
        None => call.await,
    };
    outcome.map_err(|e| GatewayError::External(e.to_string()))
}
