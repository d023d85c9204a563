// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Loading the relay's signing key.
//!
//! The key is supplied out of band (`PRIVATE_KEY`), either as 64 hex
//! characters with an optional `0x` prefix, or as a SEC1 / PKCS#8 PEM block.

use alloy::signers::local::PrivateKeySigner;
use k256::SecretKey;

use super::address::TronAddress;
use super::client::LedgerError;

/// Parse a private key from PEM format to hex string.
pub fn pem_to_hex(pem_bytes: &[u8]) -> Result<String, LedgerError> {
    let pem_str = std::str::from_utf8(pem_bytes)
        .map_err(|e| LedgerError::InvalidPrivateKey(format!("Invalid UTF-8: {}", e)))?;

    let pem = pem::parse(pem_str)
        .map_err(|e| LedgerError::InvalidPrivateKey(format!("Invalid PEM: {}", e)))?;

    let secret_key = SecretKey::from_sec1_der(pem.contents())
        .or_else(|_| parse_pkcs8_to_secret_key(pem.contents()))
        .map_err(|e| LedgerError::InvalidPrivateKey(format!("Invalid key format: {}", e)))?;

    Ok(alloy::hex::encode(secret_key.to_bytes()))
}

fn parse_pkcs8_to_secret_key(der: &[u8]) -> Result<SecretKey, String> {
    use k256::pkcs8::DecodePrivateKey;
    SecretKey::from_pkcs8_der(der).map_err(|e| e.to_string())
}

/// Create a signer from a hex-encoded key (`0x` prefix optional).
pub fn signer_from_hex(private_key_hex: &str) -> Result<PrivateKeySigner, LedgerError> {
    let trimmed = private_key_hex.trim();
    let hex = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let key_bytes = alloy::hex::decode(hex)
        .map_err(|e| LedgerError::InvalidPrivateKey(e.to_string()))?;

    PrivateKeySigner::from_slice(&key_bytes)
        .map_err(|e| LedgerError::InvalidPrivateKey(e.to_string()))
}

/// Create a signer from whatever form `PRIVATE_KEY` was given in.
pub fn load_signer(raw: &str) -> Result<PrivateKeySigner, LedgerError> {
    if raw.trim_start().starts_with("-----BEGIN") {
        let hex_key = pem_to_hex(raw.as_bytes())?;
        signer_from_hex(&hex_key)
    } else {
        signer_from_hex(raw)
    }
}

/// TRON address controlled by a signer.
pub fn signer_address(signer: &PrivateKeySigner) -> TronAddress {
    TronAddress::from_evm(signer.address())
}
