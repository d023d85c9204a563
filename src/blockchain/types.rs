// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! TRON network and token constants.

use serde_json::Value;

use super::amount::USDT_DECIMALS;

/// TRON network configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Short name used in configuration (`nile`, `shasta`, `mainnet`)
    pub name: &'static str,
    /// Network name for display
    pub display_name: &'static str,
    /// TronGrid full-node HTTP endpoint
    pub full_host: &'static str,
    /// Block explorer URL
    pub explorer_url: &'static str,
}

/// TRON Nile testnet configuration.
pub const TRON_NILE: NetworkConfig = NetworkConfig {
    name: "nile",
    display_name: "TRON Nile Testnet",
    full_host: "https://nile.trongrid.io",
    explorer_url: "https://nile.tronscan.org",
};

/// TRON Shasta testnet configuration.
pub const TRON_SHASTA: NetworkConfig = NetworkConfig {
    name: "shasta",
    display_name: "TRON Shasta Testnet",
    full_host: "https://api.shasta.trongrid.io",
    explorer_url: "https://shasta.tronscan.org",
};

/// TRON mainnet configuration.
pub const TRON_MAINNET: NetworkConfig = NetworkConfig {
    name: "mainnet",
    display_name: "TRON Mainnet",
    full_host: "https://api.trongrid.io",
    explorer_url: "https://tronscan.org",
};

impl NetworkConfig {
    /// Look up a network by its configuration name (case-insensitive).
    pub fn by_name(name: &str) -> Option<NetworkConfig> {
        match name.trim().to_ascii_lowercase().as_str() {
            "nile" => Some(TRON_NILE),
            "shasta" => Some(TRON_SHASTA),
            "mainnet" => Some(TRON_MAINNET),
            _ => None,
        }
    }

    /// Explorer page of a transaction.
    pub fn transaction_url(&self, tx_id: &str) -> String {
        format!("{}/#/transaction/{}", self.explorer_url, tx_id)
    }
}

/// Known TRC-20 token.
#[derive(Debug, Clone)]
pub struct Trc20Token {
    pub symbol: &'static str,
    pub decimals: u8,
    pub mainnet_address: Option<&'static str>,
    pub nile_address: Option<&'static str>,
}

impl Trc20Token {
    /// Contract address on the given network, if deployed there.
    pub fn address_on(&self, network: &NetworkConfig) -> Option<&'static str> {
        match network.name {
            "mainnet" => self.mainnet_address,
            "nile" => self.nile_address,
            _ => None,
        }
    }
}

/// Tether USD on TRON.
pub const USDT_TOKEN: Trc20Token = Trc20Token {
    symbol: "USDT",
    decimals: USDT_DECIMALS,
    mainnet_address: Some("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t"),
    nile_address: Some("TXYZopYRdj2D9XRtbG411XZZ3kM5VkAeBf"),
};

/// Maximum fee, in sun, a transfer may burn. 1 TRX = 1_000_000 sun.
pub const DEFAULT_FEE_LIMIT_SUN: u64 = 1_000_000_000;

/// Identifier reported when an acknowledgment carries no transaction id.
pub const UNKNOWN_TX_ID: &str = "unknown";

/// Acknowledgment returned by a ledger client after submitting a transfer.
///
/// The shape depends on the client and node version, so identifier
/// extraction is ordered and falls back to [`UNKNOWN_TX_ID`].
#[derive(Debug, Clone, PartialEq)]
pub enum TransferAck {
    /// The acknowledgment is the transaction id itself.
    Identifier(String),
    /// A transaction or broadcast receipt object.
    Receipt(serde_json::Map<String, Value>),
    /// Anything else.
    Unrecognized(Value),
}

impl TransferAck {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(id) => TransferAck::Identifier(id),
            Value::Object(map) => TransferAck::Receipt(map),
            other => TransferAck::Unrecognized(other),
        }
    }

    /// Transaction id, checked in order: the ack itself, `txID`, `txId`,
    /// `transaction.txID`, `result.txID`.
    pub fn transaction_id(&self) -> Option<&str> {
        match self {
            TransferAck::Identifier(id) if !id.is_empty() => Some(id.as_str()),
            TransferAck::Identifier(_) | TransferAck::Unrecognized(_) => None,
            TransferAck::Receipt(map) => non_empty(map.get("txID"))
                .or_else(|| non_empty(map.get("txId")))
                .or_else(|| non_empty(map.get("transaction").and_then(|t| t.get("txID"))))
                .or_else(|| non_empty(map.get("result").and_then(|r| r.get("txID")))),
        }
    }

    /// Transaction id or the `"unknown"` marker.
    pub fn tx_hash(&self) -> String {
        self.transaction_id().unwrap_or(UNKNOWN_TX_ID).to_string()
    }
}

fn non_empty(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
