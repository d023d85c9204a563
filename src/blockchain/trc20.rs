// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! TRC-20 call encoding.
//!
//! TRC-20 shares the ERC-20 ABI. TronGrid's contract-trigger endpoints take
//! the function signature and the ABI-encoded arguments separately, so the
//! 4-byte selector is stripped from the encoded call.

use alloy::{
    primitives::{Address, U256},
    sol,
    sol_types::SolCall,
};

use super::client::LedgerError;

sol! {
    interface ITRC20 {
        function balanceOf(address account) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
    }
}

/// Selector and hex parameter for a `trigger*contract` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedCall {
    pub function_selector: &'static str,
    pub parameter: String,
}

fn encode<C: SolCall>(call: &C) -> EncodedCall {
    let data = call.abi_encode();
    EncodedCall {
        function_selector: C::SIGNATURE,
        parameter: alloy::hex::encode(&data[4..]),
    }
}

/// Encode `transfer(to, amount)`.
pub fn encode_transfer(to: Address, amount: U256) -> EncodedCall {
    encode(&ITRC20::transferCall { to, amount })
}

/// Encode `balanceOf(account)`.
pub fn encode_balance_of(account: Address) -> EncodedCall {
    encode(&ITRC20::balanceOfCall { account })
}

/// Decode the single `uint256` word returned by `balanceOf`.
pub fn decode_uint256(constant_result: &str) -> Result<U256, LedgerError> {
    let hex = constant_result.trim().trim_start_matches("0x");
    if hex.is_empty() || hex.len() > 64 {
        return Err(LedgerError::InvalidResponse(format!(
            "unexpected uint256 result `{constant_result}`"
        )));
    }
    U256::from_str_radix(hex, 16).map_err(|e| {
        LedgerError::InvalidResponse(format!("unexpected uint256 result `{constant_result}`: {e}"))
    })
}
