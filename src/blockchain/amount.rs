// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Conversion between human-readable token amounts and integer base units.
//!
//! Amounts are scaled with exact 256-bit integer arithmetic, the same width as
//! the `uint256` argument of a TRC20 `transfer` call. Floating point is only
//! used for the display value returned by balance queries.
//!
//! Fractional digits beyond the token precision are truncated, not rounded:
//! `"1.1234567"` at 6 decimals becomes `1123456`.

use std::fmt;

use alloy::primitives::U256;

/// Decimal places of USDT on TRON.
pub const USDT_DECIMALS: u8 = 6;

/// Integer quantity in a token's smallest unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TokenAmount(U256);

impl TokenAmount {
    pub fn new(units: U256) -> Self {
        Self(units)
    }

    pub fn units(&self) -> U256 {
        self.0
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

/// Errors produced while parsing a decimal amount.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,

    #[error("malformed amount `{0}`")]
    Malformed(String),

    #[error("amount `{0}` exceeds the representable range")]
    Overflow(String),
}

/// Convert a decimal string such as `"1.5"` into token units.
///
/// A missing whole part counts as zero (`".5"`), a missing fractional part
/// as all zeros (`"2"`, `"2."`). Extra fractional digits are dropped.
pub fn to_token_units(amount: &str, decimals: u8) -> Result<TokenAmount, AmountError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(AmountError::Empty);
    }

    let (whole, fraction) = match amount.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (amount, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !all_digits(fraction) || (whole.is_empty() && fraction.is_empty()) {
        return Err(AmountError::Malformed(amount.to_string()));
    }

    let whole = if whole.is_empty() { "0" } else { whole };
    let precision = decimals as usize;
    let mut fraction = fraction[..fraction.len().min(precision)].to_string();
    while fraction.len() < precision {
        fraction.push('0');
    }

    let overflow = || AmountError::Overflow(amount.to_string());
    let whole = U256::from_str_radix(whole, 10).map_err(|_| overflow())?;
    let fraction = if fraction.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(&fraction, 10).map_err(|_| overflow())?
    };

    let scale = U256::from(10u64).pow(U256::from(decimals));
    whole
        .checked_mul(scale)
        .and_then(|w| w.checked_add(fraction))
        .map(TokenAmount)
        .ok_or_else(overflow)
}

/// Render token units as an exact decimal string, trimming trailing zeros.
pub fn format_token_units(units: U256, decimals: u8) -> String {
    if units.is_zero() {
        return "0".to_string();
    }

    let divisor = U256::from(10u64).pow(U256::from(decimals));
    let whole = units / divisor;
    let remainder = units % divisor;

    if remainder.is_zero() {
        whole.to_string()
    } else {
        let decimal_str = format!(
            "{:0>width$}",
            remainder.to_string(),
            width = decimals as usize
        );
        let trimmed = decimal_str.trim_end_matches('0');
        format!("{}.{}", whole, trimmed)
    }
}

/// Display value of a raw balance. Lossy for very large balances; never feed
/// the result back into a transfer.
pub fn to_display_number(units: U256, decimals: u8) -> f64 {
    // format_token_units always yields a plain decimal literal
    format_token_units(units, decimals)
        .parse()
        .unwrap_or_default()
}
