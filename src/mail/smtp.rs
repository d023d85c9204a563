// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! SMTP delivery through an authenticated relay on the submission port (587).
//! The session must be upgraded with STARTTLS; a relay that does not offer
//! it is refused.

use std::fmt;

use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::{authentication::Credentials, SUBMISSION_PORT},
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::debug;

use super::{MailError, MailTransport, OutgoingMail};

/// Default relay host.
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default display name of the sender.
pub const DEFAULT_SENDER_NAME: &str = "TetherFlash";

/// SMTP settings read from the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct MailSettings {
    pub smtp_host: String,
    /// Relay login; also the sender mailbox.
    pub username: Option<String>,
    pub password: Option<String>,
    pub sender_name: String,
}

impl fmt::Debug for MailSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailSettings")
            .field("smtp_host", &self.smtp_host)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("sender_name", &self.sender_name)
            .finish()
    }
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            smtp_host: DEFAULT_SMTP_HOST.to_string(),
            username: None,
            password: None,
            sender_name: DEFAULT_SENDER_NAME.to_string(),
        }
    }
}

struct Relay {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

/// Mail transport backed by an SMTP relay.
///
/// Without credentials the mailer is still constructed, and every send fails
/// with [`MailError::NotConfigured`].
pub struct SmtpMailer {
    relay: Option<Relay>,
}

/// STARTTLS-required transport to `host:port`.
fn relay_transport(
    host: &str,
    port: u16,
    credentials: Credentials,
) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailError> {
    Ok(AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
        .map_err(|e| MailError::Transport(e.to_string()))?
        .port(port)
        .credentials(credentials)
        .build())
}

fn parse_address(raw: &str) -> Result<Address, MailError> {
    raw.trim()
        .parse::<Address>()
        .map_err(|e| MailError::InvalidAddress {
            address: raw.to_string(),
            reason: e.to_string(),
        })
}

impl SmtpMailer {
    pub fn new(settings: &MailSettings) -> Result<Self, MailError> {
        let (username, password) = match (&settings.username, &settings.password) {
            (Some(user), Some(pass)) => (user, pass),
            _ => return Ok(Self { relay: None }),
        };

        let sender = Mailbox::new(Some(settings.sender_name.clone()), parse_address(username)?);
        let transport = relay_transport(
            &settings.smtp_host,
            SUBMISSION_PORT,
            Credentials::new(username.clone(), password.clone()),
        )?;

        Ok(Self {
            relay: Some(Relay { transport, sender }),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.relay.is_some()
    }
}

/// Build the MIME message for `mail` from `sender`.
fn build_message(sender: &Mailbox, mail: OutgoingMail) -> Result<Message, MailError> {
    let recipient = Mailbox::new(None, parse_address(&mail.to)?);
    Message::builder()
        .from(sender.clone())
        .to(recipient)
        .subject(mail.subject)
        .header(ContentType::TEXT_HTML)
        .body(mail.html)
        .map_err(|e| MailError::Build(e.to_string()))
}

#[async_trait::async_trait]
impl MailTransport for SmtpMailer {
    async fn send_html(&self, mail: OutgoingMail) -> Result<(), MailError> {
        let relay = self.relay.as_ref().ok_or(MailError::NotConfigured)?;
        let message = build_message(&relay.sender, mail)?;

        let response = relay
            .transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;
        debug!(code = %response.code(), "SMTP relay accepted message");
        Ok(())
    }
}
