// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Templated email notifications.

use std::sync::Arc;

use tracing::{error, info};

use super::{call_external, GatewayError, GatewaySettings};
use crate::{
    mail::{render_notification, MailTransport, OutgoingMail},
    models::NotificationRequest,
};

pub const NOTIFICATION_FIELDS_REQUIRED: &str = "to, subject, message required";

pub struct NotificationGateway {
    mailer: Arc<dyn MailTransport>,
    settings: GatewaySettings,
}

impl NotificationGateway {
    pub fn new(mailer: Arc<dyn MailTransport>, settings: GatewaySettings) -> Self {
        Self { mailer, settings }
    }

    /// Render the branded template around `message` and send one email.
    pub async fn send_notification(&self, request: NotificationRequest) -> Result<(), GatewayError> {
        let (to, subject, message) = request.fields().ok_or_else(|| {
            GatewayError::Validation(NOTIFICATION_FIELDS_REQUIRED.to_string())
        })?;

        let mail = OutgoingMail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: render_notification(&self.settings.sender_name, subject, message),
        };

        call_external(self.settings.external_timeout, self.mailer.send_html(mail))
            .await
            .inspect_err(|e| error!(%to, error = %e, "Notification delivery failed"))?;

        info!(%to, %subject, "Notification sent");
        Ok(())
    }
}
