// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Stub collaborators for gateway and router tests.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use alloy::primitives::U256;

use crate::{
    blockchain::{LedgerClient, LedgerError, TokenAmount, TransferAck, TRON_NILE},
    gateway::{GatewaySettings, TokenSettings},
    mail::{MailError, MailTransport, OutgoingMail},
    state::AppState,
};

pub const RELAY_ADDRESS: &str = "TMVQGm1qAQYVdetCeGRRkTWYYrLXuHK2HC";
pub const NILE_USDT: &str = "TXYZopYRdj2D9XRtbG411XZZ3kM5VkAeBf";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedTransfer {
    pub contract: String,
    pub to: String,
    pub amount: TokenAmount,
    pub fee_limit: u64,
}

/// Ledger that records calls and replays canned outcomes.
pub struct StubLedger {
    pub ack: Result<TransferAck, String>,
    pub balance: Result<U256, String>,
    pub owner: Option<String>,
    pub delay: Option<Duration>,
    pub transfers: Mutex<Vec<RecordedTransfer>>,
    pub balance_queries: Mutex<Vec<String>>,
}

impl Default for StubLedger {
    fn default() -> Self {
        Self {
            ack: Ok(TransferAck::Identifier("abc123".to_string())),
            balance: Ok(U256::from(2_500_000u64)),
            owner: Some(RELAY_ADDRESS.to_string()),
            delay: None,
            transfers: Mutex::new(Vec::new()),
            balance_queries: Mutex::new(Vec::new()),
        }
    }
}

impl StubLedger {
    pub fn transfers(&self) -> Vec<RecordedTransfer> {
        self.transfers.lock().unwrap().clone()
    }

    pub fn balance_queries(&self) -> Vec<String> {
        self.balance_queries.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LedgerClient for StubLedger {
    async fn transfer_token(
        &self,
        contract: &str,
        to: &str,
        amount: TokenAmount,
        fee_limit: u64,
    ) -> Result<TransferAck, LedgerError> {
        self.transfers.lock().unwrap().push(RecordedTransfer {
            contract: contract.to_string(),
            to: to.to_string(),
            amount,
            fee_limit,
        });
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.ack.clone().map_err(LedgerError::Rejected)
    }

    async fn token_balance(&self, _contract: &str, owner: &str) -> Result<U256, LedgerError> {
        self.balance_queries.lock().unwrap().push(owner.to_string());
        self.balance.clone().map_err(LedgerError::Rejected)
    }

    fn default_owner(&self) -> Result<String, LedgerError> {
        self.owner.clone().ok_or(LedgerError::MissingSigner)
    }
}

/// Mail transport that records messages.
pub struct StubMailer {
    pub result: Result<(), String>,
    pub sent: Mutex<Vec<OutgoingMail>>,
}

impl Default for StubMailer {
    fn default() -> Self {
        Self {
            result: Ok(()),
            sent: Mutex::new(Vec::new()),
        }
    }
}

impl StubMailer {
    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MailTransport for StubMailer {
    async fn send_html(&self, mail: OutgoingMail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(mail);
        self.result.clone().map_err(MailError::Transport)
    }
}

pub fn settings() -> GatewaySettings {
    GatewaySettings {
        network: TRON_NILE,
        token: TokenSettings {
            contract: NILE_USDT.to_string(),
            symbol: "USDT".to_string(),
            decimals: 6,
        },
        fee_limit: 1_000_000_000,
        external_timeout: None,
        sender_name: "TetherFlash".to_string(),
    }
}

pub fn state(ledger: Arc<StubLedger>, mailer: Arc<StubMailer>) -> AppState {
    AppState::new(ledger, mailer, settings())
}
