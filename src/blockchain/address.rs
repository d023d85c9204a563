// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! TRON account addresses.
//!
//! A TRON address is a 20-byte EVM address prefixed with `0x41`, shown to
//! users as base58check (`T...`). Contract calls take the bare 20 bytes.

use std::{fmt, str::FromStr};

use alloy::primitives::Address;

use super::client::LedgerError;

/// Prefix byte of mainnet and testnet TRON addresses.
pub const TRON_ADDRESS_PREFIX: u8 = 0x41;

const TRON_ADDRESS_LEN: usize = 21;

/// A validated TRON address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TronAddress([u8; TRON_ADDRESS_LEN]);

impl TronAddress {
    /// Build from the EVM form (e.g. a signer's address).
    pub fn from_evm(address: Address) -> Self {
        let mut bytes = [0u8; TRON_ADDRESS_LEN];
        bytes[0] = TRON_ADDRESS_PREFIX;
        bytes[1..].copy_from_slice(address.as_slice());
        Self(bytes)
    }

    /// The 20-byte form used in ABI-encoded call parameters.
    pub fn to_evm(&self) -> Address {
        Address::from_slice(&self.0[1..])
    }

    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).with_check().into_string()
    }

    fn from_bytes(bytes: &[u8], raw: &str) -> Result<Self, LedgerError> {
        if bytes.len() != TRON_ADDRESS_LEN || bytes[0] != TRON_ADDRESS_PREFIX {
            return Err(LedgerError::InvalidAddress(raw.to_string()));
        }
        let mut out = [0u8; TRON_ADDRESS_LEN];
        out.copy_from_slice(bytes);
        Ok(Self(out))
    }
}

impl FromStr for TronAddress {
    type Err = LedgerError;

    /// Accepts base58check (`T...`) or 42-character hex (`41...`).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        if value.len() == TRON_ADDRESS_LEN * 2 && value.starts_with("41") {
            let bytes = alloy::hex::decode(value)
                .map_err(|_| LedgerError::InvalidAddress(raw.to_string()))?;
            return Self::from_bytes(&bytes, raw);
        }

        let bytes = bs58::decode(value)
            .with_check(None)
            .into_vec()
            .map_err(|_| LedgerError::InvalidAddress(raw.to_string()))?;
        Self::from_bytes(&bytes, raw)
    }
}

impl fmt::Display for TronAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}
