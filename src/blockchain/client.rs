// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Ledger client capability and its TronGrid implementation.
//!
//! Transfers go through the full-node HTTP API in three steps:
//! 1. `wallet/triggersmartcontract` builds an unsigned `transfer` transaction.
//! 2. The `txID` (sha256 of `raw_data_hex`) is verified and signed locally.
//! 3. `wallet/broadcasttransaction` submits the signed transaction.
//!
//! Balances use `wallet/triggerconstantcontract`, which executes `balanceOf`
//! without creating a transaction.

use alloy::{
    primitives::{B256, U256},
    signers::{local::PrivateKeySigner, SignerSync},
};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use tracing::debug;
use url::Url;

use super::address::TronAddress;
use super::amount::TokenAmount;
use super::signing::signer_address;
use super::trc20::{decode_uint256, encode_balance_of, encode_transfer, EncodedCall};
use super::types::{NetworkConfig, TransferAck};

const TRIGGER_SMART_CONTRACT: &str = "wallet/triggersmartcontract";
const TRIGGER_CONSTANT_CONTRACT: &str = "wallet/triggerconstantcontract";
const BROADCAST_TRANSACTION: &str = "wallet/broadcasttransaction";
const API_KEY_HEADER: &str = "TRON-PRO-API-KEY";

/// External ledger operations used by the gateways.
#[async_trait::async_trait]
pub trait LedgerClient: Send + Sync {
    /// Submit a token transfer of `amount` base units from the relay's account.
    async fn transfer_token(
        &self,
        contract: &str,
        to: &str,
        amount: TokenAmount,
        fee_limit: u64,
    ) -> Result<TransferAck, LedgerError>;

    /// Raw token balance of `owner`, in base units.
    async fn token_balance(&self, contract: &str, owner: &str) -> Result<U256, LedgerError>;

    /// Address of the relay's own account.
    fn default_owner(&self) -> Result<String, LedgerError>;
}

/// Errors that can occur during ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Invalid full node URL: {0}")]
    InvalidRpcUrl(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("No signing key configured")]
    MissingSigner,

    #[error("Request to full node failed: {0}")]
    Http(String),

    /// Failure reported by the node or the contract, passed through as-is.
    #[error("{0}")]
    Rejected(String),

    #[error("Unexpected full node response: {0}")]
    InvalidResponse(String),

    #[error("Signing failed: {0}")]
    Signing(String),
}

#[derive(Debug, Serialize)]
struct TriggerRequest<'a> {
    owner_address: String,
    contract_address: String,
    function_selector: &'a str,
    parameter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fee_limit: Option<u64>,
    call_value: u64,
    visible: bool,
}

impl<'a> TriggerRequest<'a> {
    fn new(owner: &TronAddress, contract: &TronAddress, call: EncodedCall) -> Self {
        Self {
            owner_address: owner.to_base58(),
            contract_address: contract.to_base58(),
            function_selector: call.function_selector,
            parameter: call.parameter,
            fee_limit: None,
            call_value: 0,
            visible: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct CallStatus {
    #[serde(default)]
    result: bool,
    code: Option<String>,
    message: Option<String>,
}

impl CallStatus {
    fn ensure_ok(self) -> Result<(), LedgerError> {
        if self.result {
            Ok(())
        } else {
            Err(LedgerError::Rejected(node_message(self.code, self.message)))
        }
    }
}

#[derive(Debug, Deserialize)]
struct TriggerResponse {
    #[serde(default)]
    result: CallStatus,
    transaction: Option<Value>,
    #[serde(default)]
    constant_result: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct BroadcastResponse {
    #[serde(default)]
    result: bool,
    txid: Option<String>,
    code: Option<String>,
    message: Option<String>,
}

/// Node messages are usually hex-encoded UTF-8.
fn node_message(code: Option<String>, message: Option<String>) -> String {
    let decoded = message.map(|m| {
        alloy::hex::decode(&m)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .unwrap_or(m)
    });

    match (code, decoded) {
        (_, Some(message)) if !message.is_empty() => message,
        (Some(code), _) => code,
        _ => "Transaction rejected by full node".to_string(),
    }
}

/// Verify the node-built `txID` and attach a secp256k1 signature to it.
pub(crate) fn sign_transaction(
    transaction: &mut Value,
    signer: &PrivateKeySigner,
) -> Result<(), LedgerError> {
    let field = |name: &str| {
        transaction
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| LedgerError::InvalidResponse(format!("transaction is missing `{name}`")))
    };
    let tx_id = field("txID")?;
    let raw_data_hex = field("raw_data_hex")?;

    let raw = alloy::hex::decode(&raw_data_hex)
        .map_err(|e| LedgerError::InvalidResponse(format!("raw_data_hex: {e}")))?;
    let id = alloy::hex::decode(&tx_id)
        .map_err(|e| LedgerError::InvalidResponse(format!("txID: {e}")))?;
    if id.len() != 32 || Sha256::digest(&raw)[..] != id[..] {
        return Err(LedgerError::InvalidResponse(
            "txID does not match raw_data_hex".to_string(),
        ));
    }

    let signature = signer
        .sign_hash_sync(&B256::from_slice(&id))
        .map_err(|e| LedgerError::Signing(e.to_string()))?;
    transaction["signature"] = json!([alloy::hex::encode(signature.as_bytes())]);
    Ok(())
}

/// TronGrid full-node client.
pub struct TronClient {
    /// Network configuration
    network: NetworkConfig,
    /// Base URL of the full-node HTTP API
    full_host: Url,
    /// Optional TronGrid API key
    api_key: Option<String>,
    /// Relay account signer; transfers are refused without one
    signer: Option<PrivateKeySigner>,
    http: Client,
}

impl TronClient {
    /// Create a client for `network`, optionally overriding its full host.
    pub fn new(
        network: NetworkConfig,
        full_host: Option<&str>,
        api_key: Option<String>,
        signer: Option<PrivateKeySigner>,
    ) -> Result<Self, LedgerError> {
        let host = full_host.unwrap_or(network.full_host);
        let host = if host.ends_with('/') {
            host.to_string()
        } else {
            format!("{host}/")
        };
        let full_host: Url = host
            .parse()
            .map_err(|e: url::ParseError| LedgerError::InvalidRpcUrl(e.to_string()))?;

        let http = Client::builder()
            .build()
            .map_err(|e| LedgerError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            network,
            full_host,
            api_key,
            signer,
            http,
        })
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, LedgerError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self
            .full_host
            .join(path)
            .map_err(|e| LedgerError::InvalidRpcUrl(e.to_string()))?;

        let mut request = self.http.post(url).json(body);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| LedgerError::Http(e.to_string()))?
            .error_for_status()
            .map_err(|e| LedgerError::Http(e.to_string()))?;

        response
            .json::<R>()
            .await
            .map_err(|e| LedgerError::InvalidResponse(e.to_string()))
    }
}

#[async_trait::async_trait]
impl LedgerClient for TronClient {
    async fn transfer_token(
        &self,
        contract: &str,
        to: &str,
        amount: TokenAmount,
        fee_limit: u64,
    ) -> Result<TransferAck, LedgerError> {
        let signer = self.signer.as_ref().ok_or(LedgerError::MissingSigner)?;
        let owner = signer_address(signer);
        let contract: TronAddress = contract.parse()?;
        let recipient: TronAddress = to.parse()?;

        let mut request = TriggerRequest::new(
            &owner,
            &contract,
            encode_transfer(recipient.to_evm(), amount.units()),
        );
        request.fee_limit = Some(fee_limit);

        let response: TriggerResponse = self.post(TRIGGER_SMART_CONTRACT, &request).await?;
        response.result.ensure_ok()?;
        let mut transaction = response.transaction.ok_or_else(|| {
            LedgerError::InvalidResponse("trigger response carried no transaction".to_string())
        })?;

        sign_transaction(&mut transaction, signer)?;
        debug!(
            network = self.network.name,
            tx_id = ?transaction.get("txID"),
            "Broadcasting signed transfer"
        );

        let receipt: BroadcastResponse = self.post(BROADCAST_TRANSACTION, &transaction).await?;
        if !receipt.result {
            return Err(LedgerError::Rejected(node_message(
                receipt.code,
                receipt.message,
            )));
        }

        Ok(match receipt.txid.filter(|id| !id.is_empty()) {
            Some(txid) => TransferAck::Identifier(txid),
            None => TransferAck::from_value(transaction),
        })
    }

    async fn token_balance(&self, contract: &str, owner: &str) -> Result<U256, LedgerError> {
        let contract: TronAddress = contract.parse()?;
        let owner: TronAddress = owner.parse()?;

        let request = TriggerRequest::new(&owner, &contract, encode_balance_of(owner.to_evm()));
        let response: TriggerResponse = self.post(TRIGGER_CONSTANT_CONTRACT, &request).await?;
        response.result.ensure_ok()?;

        let word = response.constant_result.first().ok_or_else(|| {
            LedgerError::InvalidResponse("balanceOf returned no result".to_string())
        })?;
        decode_uint256(word)
    }

    fn default_owner(&self) -> Result<String, LedgerError> {
        self.signer
            .as_ref()
            .map(|signer| signer_address(signer).to_base58())
            .ok_or(LedgerError::MissingSigner)
    }
}
