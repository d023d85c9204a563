// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::{
    blockchain::{LedgerClient, NetworkConfig},
    gateway::{BalanceGateway, GatewaySettings, NotificationGateway, TransferGateway},
    mail::MailTransport,
};

#[derive(Clone)]
pub struct AppState {
    pub transfers: Arc<TransferGateway>,
    pub balances: Arc<BalanceGateway>,
    pub notifications: Arc<NotificationGateway>,
    pub network: NetworkConfig,
    pub token_symbol: String,
}

impl AppState {
    pub fn new(
        ledger: Arc<dyn LedgerClient>,
        mailer: Arc<dyn MailTransport>,
        settings: GatewaySettings,
    ) -> Self {
        Self {
            transfers: Arc::new(TransferGateway::new(ledger.clone(), settings.clone())),
            balances: Arc::new(BalanceGateway::new(ledger, settings.clone())),
            notifications: Arc::new(NotificationGateway::new(mailer, settings.clone())),
            network: settings.network,
            token_symbol: settings.token.symbol,
        }
    }
}
