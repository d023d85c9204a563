// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, Json};

use super::extract::Payload;
use crate::{
    error::{ApiError, ErrorBody},
    models::{NotificationRequest, NotificationResult},
    state::AppState,
};

/// Email a branded notification. `message` is inserted as HTML.
#[utoipa::path(
    post,
    path = "/send-email",
    tag = "Notifications",
    request_body(content = NotificationRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Email sent", body = NotificationResult),
        (status = 400, description = "Missing to, subject or message", body = ErrorBody),
        (status = 500, description = "Mail relay failed", body = ErrorBody)
    )
)]
pub async fn send_email(
    State(state): State<AppState>,
    Payload(request): Payload<NotificationRequest>,
) -> Result<Json<NotificationResult>, ApiError> {
    state.notifications.send_notification(request).await?;
    Ok(Json(NotificationResult::sent()))
}
