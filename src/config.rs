// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! throughout the relay. Configuration is loaded from the environment once at
//! startup; a `.env` file is read first when present.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `3000` |
//! | `TRON_NETWORK` | `nile`, `shasta` or `mainnet` | `nile` |
//! | `TRON_FULL_HOST` | Full-node HTTP endpoint override | network default |
//! | `TRON_PRO_API_KEY` | TronGrid API key | none |
//! | `PRIVATE_KEY` | Relay signing key, hex or PEM | none |
//! | `TOKEN_CONTRACT` | TRC-20 contract address | USDT on the network |
//! | `FEE_LIMIT_SUN` | Fee limit per transfer, in sun | `1000000000` |
//! | `EXTERNAL_CALL_TIMEOUT_SECS` | Timeout for ledger and mail calls, `0` disables | disabled |
//! | `SMTP_HOST` | SMTP relay host | `smtp.gmail.com` |
//! | `EMAIL_USER` | SMTP login and sender mailbox | none |
//! | `EMAIL_PASS` | SMTP password | none |
//! | `MAIL_SENDER_NAME` | Sender display name | `TetherFlash` |
//! | `TLS_CERT_PATH` | PEM certificate chain; enables HTTPS with `TLS_KEY_PATH` | none |
//! | `TLS_KEY_PATH` | PEM private key | none |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::{
    fmt,
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    time::Duration,
};

use crate::blockchain::{NetworkConfig, DEFAULT_FEE_LIMIT_SUN, TRON_NILE, USDT_TOKEN};
use crate::mail::MailSettings;

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const TRON_NETWORK_ENV: &str = "TRON_NETWORK";
pub const TRON_FULL_HOST_ENV: &str = "TRON_FULL_HOST";
pub const TRON_API_KEY_ENV: &str = "TRON_PRO_API_KEY";
/// Signing key of the relay account. Never logged.
pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";
pub const TOKEN_CONTRACT_ENV: &str = "TOKEN_CONTRACT";
pub const FEE_LIMIT_ENV: &str = "FEE_LIMIT_SUN";
pub const EXTERNAL_TIMEOUT_ENV: &str = "EXTERNAL_CALL_TIMEOUT_SECS";
pub const SMTP_HOST_ENV: &str = "SMTP_HOST";
pub const EMAIL_USER_ENV: &str = "EMAIL_USER";
pub const EMAIL_PASS_ENV: &str = "EMAIL_PASS";
pub const MAIL_SENDER_NAME_ENV: &str = "MAIL_SENDER_NAME";
pub const TLS_CERT_PATH_ENV: &str = "TLS_CERT_PATH";
pub const TLS_KEY_PATH_ENV: &str = "TLS_KEY_PATH";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

/// Certificate and key for serving HTTPS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsPaths {
    pub cert: PathBuf,
    pub key: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is invalid: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("Unknown TRON network `{0}` (expected nile, shasta or mainnet)")]
    UnknownNetwork(String),

    #[error("No default token contract on {0}; set TOKEN_CONTRACT")]
    MissingTokenContract(&'static str),

    #[error("TLS_CERT_PATH and TLS_KEY_PATH must be set together")]
    IncompleteTls,
}

/// Relay configuration.
#[derive(Clone)]
pub struct RelayConfig {
    pub host: String,
    pub port: u16,
    pub network: NetworkConfig,
    pub full_host: Option<String>,
    pub tron_api_key: Option<String>,
    pub private_key: Option<String>,
    pub token_contract: String,
    pub fee_limit: u64,
    /// `None` leaves external calls unbounded.
    pub external_timeout: Option<Duration>,
    pub mail: MailSettings,
    pub tls: Option<TlsPaths>,
    pub log_format: LogFormat,
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("RelayConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("network", &self.network.name)
            .field("full_host", &self.full_host)
            .field("tron_api_key", &redacted(&self.tron_api_key))
            .field("private_key", &redacted(&self.private_key))
            .field("token_contract", &self.token_contract)
            .field("fee_limit", &self.fee_limit)
            .field("external_timeout", &self.external_timeout)
            .field("smtp_host", &self.mail.smtp_host)
            .field("email_user", &self.mail.username)
            .field("tls", &self.tls)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl RelayConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match get(PORT_ENV) {
            Some(raw) => parse_number(PORT_ENV, &raw)?,
            None => DEFAULT_PORT,
        };

        let network = match get(TRON_NETWORK_ENV) {
            Some(name) => {
                NetworkConfig::by_name(&name).ok_or(ConfigError::UnknownNetwork(name))?
            }
            None => TRON_NILE,
        };

        let token_contract = match get(TOKEN_CONTRACT_ENV) {
            Some(contract) => contract,
            None => USDT_TOKEN
                .address_on(&network)
                .ok_or(ConfigError::MissingTokenContract(network.name))?
                .to_string(),
        };

        let fee_limit = match get(FEE_LIMIT_ENV) {
            Some(raw) => parse_number(FEE_LIMIT_ENV, &raw)?,
            None => DEFAULT_FEE_LIMIT_SUN,
        };

        let external_timeout = match get(EXTERNAL_TIMEOUT_ENV) {
            Some(raw) => match parse_number::<u64>(EXTERNAL_TIMEOUT_ENV, &raw)? {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
            None => None,
        };

        let tls = match (get(TLS_CERT_PATH_ENV), get(TLS_KEY_PATH_ENV)) {
            (Some(cert), Some(key)) => Some(TlsPaths {
                cert: cert.into(),
                key: key.into(),
            }),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteTls),
        };

        let log_format = match get(LOG_FORMAT_ENV).map(|v| v.to_ascii_lowercase()) {
            None => LogFormat::Pretty,
            Some(v) if v == "pretty" || v == "text" => LogFormat::Pretty,
            Some(v) if v == "json" => LogFormat::Json,
            Some(v) => {
                return Err(ConfigError::Invalid {
                    var: LOG_FORMAT_ENV,
                    value: v,
                    reason: "expected `json` or `pretty`".to_string(),
                })
            }
        };

        let defaults = MailSettings::default();
        let mail = MailSettings {
            smtp_host: get(SMTP_HOST_ENV).unwrap_or(defaults.smtp_host),
            username: get(EMAIL_USER_ENV),
            password: get(EMAIL_PASS_ENV),
            sender_name: get(MAIL_SENDER_NAME_ENV).unwrap_or(defaults.sender_name),
        };

        Ok(Self {
            host: get(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            network,
            full_host: get(TRON_FULL_HOST_ENV),
            tron_api_key: get(TRON_API_KEY_ENV),
            private_key: get(PRIVATE_KEY_ENV),
            token_contract,
            fee_limit,
            external_timeout,
            mail,
            tls,
            log_format,
        })
    }

    /// Socket address to listen on.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                var: HOST_ENV,
                value: self.host.clone(),
                reason: e.to_string(),
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn parse_number<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
