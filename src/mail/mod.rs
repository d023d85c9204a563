// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Mail transport capability.
//!
//! - `smtp` - authenticated SMTP relay implementation (lettre)
//! - `template` - HTML body of notification emails

pub mod smtp;
pub mod template;

pub use smtp::{MailSettings, SmtpMailer};
pub use template::render_notification;

/// A message ready for delivery. The sender is fixed by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Delivers HTML email from the relay's sender identity.
#[async_trait::async_trait]
pub trait MailTransport: Send + Sync {
    async fn send_html(&self, mail: OutgoingMail) -> Result<(), MailError>;
}

/// Errors that can occur while delivering mail.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Mail transport is not configured (set EMAIL_USER and EMAIL_PASS)")]
    NotConfigured,

    #[error("Invalid email address `{address}`: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("{0}")]
    Build(String),

    /// Relay failure, passed through as-is.
    #[error("{0}")]
    Transport(String),
}
