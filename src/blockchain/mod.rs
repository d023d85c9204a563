// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! TRON ledger integration.
//!
//! This module provides:
//! - Decimal amount normalization for fixed-decimals tokens
//! - TRON base58check addresses and signing-key loading
//! - TRC-20 transfer submission and balance queries over TronGrid

pub mod address;
pub mod amount;
pub mod client;
pub mod signing;
pub mod trc20;
pub mod types;

pub use address::TronAddress;
pub use amount::{
    format_token_units, to_display_number, to_token_units, AmountError, TokenAmount,
    USDT_DECIMALS,
};
pub use client::{LedgerClient, LedgerError, TronClient};
pub use types::*;
