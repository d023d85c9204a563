// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response bodies of the relay's HTTP surface. Requests accept
//! a few alternate field names so existing clients keep working; every
//! success body carries `success: true`, failures use
//! [`ErrorBody`](crate::error::ErrorBody).

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// =============================================================================
// Transfer Models
// =============================================================================

/// Amount as sent by the client: a decimal string or a JSON number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Text(String),
    Number(f64),
}

impl AmountInput {
    /// Decimal string form of the amount.
    pub fn to_decimal_string(&self) -> String {
        match self {
            AmountInput::Text(text) => text.clone(),
            AmountInput::Number(number) => number.to_string(),
        }
    }
}

/// Request to send tokens from the relay account.
///
/// The recipient is the first non-empty of `recipient`, `to`, `address`;
/// the amount the first non-empty of `amount`, `value`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TransferRequest {
    /// Recipient TRON address (`T...`)
    #[schema(example = "TMVQGm1qAQYVdetCeGRRkTWYYrLXuHK2HC")]
    pub recipient: Option<String>,
    /// Alias of `recipient`
    pub to: Option<String>,
    /// Alias of `recipient`
    pub address: Option<String>,
    /// Human-readable amount, e.g. `"1.5"`. Digits past the token's
    /// precision are truncated.
    #[schema(value_type = Option<String>, example = "1.5")]
    pub amount: Option<AmountInput>,
    /// Alias of `amount`
    #[schema(value_type = Option<String>)]
    pub value: Option<AmountInput>,
}

impl TransferRequest {
    pub fn recipient(&self) -> Option<&str> {
        [&self.recipient, &self.to, &self.address]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
    }

    pub fn amount(&self) -> Option<String> {
        [&self.amount, &self.value]
            .into_iter()
            .flatten()
            .map(AmountInput::to_decimal_string)
            .find(|s| !s.trim().is_empty())
    }
}

/// Successful transfer submission.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TransferResult {
    pub success: bool,
    /// Transaction id, or `"unknown"` when the ledger did not report one
    #[serde(rename = "txHash")]
    pub tx_hash: String,
}

impl TransferResult {
    pub fn submitted(tx_hash: String) -> Self {
        Self {
            success: true,
            tx_hash,
        }
    }
}

// =============================================================================
// Balance Models
// =============================================================================

/// Query parameters for the balance endpoint.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct BalanceQuery {
    /// Account to query. Defaults to the relay account.
    pub address: Option<String>,
}

/// Token balance in display units.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BalanceResult {
    pub success: bool,
    #[schema(example = 2.5)]
    pub balance: f64,
}

impl BalanceResult {
    pub fn of(balance: f64) -> Self {
        Self {
            success: true,
            balance,
        }
    }
}

// =============================================================================
// Notification Models
// =============================================================================

/// Request to email a notification.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NotificationRequest {
    #[schema(example = "user@example.com")]
    pub to: Option<String>,
    pub subject: Option<String>,
    /// Inserted into the HTML body without escaping
    pub message: Option<String>,
}

impl NotificationRequest {
    /// `(to, subject, message)` when all three are present and non-empty.
    pub fn fields(&self) -> Option<(&str, &str, &str)> {
        fn field(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|s| !s.trim().is_empty())
        }
        Some((
            field(&self.to)?,
            field(&self.subject)?,
            field(&self.message)?,
        ))
    }
}

/// Successful notification delivery.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NotificationResult {
    pub success: bool,
    #[schema(example = "Email sent")]
    pub message: String,
}

impl NotificationResult {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: "Email sent".to_string(),
        }
    }
}
