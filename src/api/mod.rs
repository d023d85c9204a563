// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::HeaderName,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    error::ErrorBody,
    models::{
        BalanceResult, NotificationRequest, NotificationResult, TransferRequest, TransferResult,
    },
    state::AppState,
};

pub mod balance;
pub mod email;
pub mod extract;
pub mod health;
pub mod transfer;

const REQUEST_ID_HEADER: &str = "x-request-id";

pub fn router(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route("/", get(health::liveness))
        .route("/health", get(health::health))
        .route("/send-usdt", post(transfer::send_usdt))
        .route("/balance", get(balance::get_balance))
        .route("/send-email", post(email::send_email))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(CorsLayer::permissive()),
        )
}

#[derive(OpenApi)]
#[openapi(
    info(title = "TetherFlash Relay", description = "TRC20 transfers and email notifications"),
    paths(
        health::liveness,
        health::health,
        transfer::send_usdt,
        balance::get_balance,
        email::send_email
    ),
    components(
        schemas(
            health::HealthResponse,
            TransferRequest,
            TransferResult,
            BalanceResult,
            NotificationRequest,
            NotificationResult,
            ErrorBody
        )
    ),
    tags(
        (name = "Health", description = "Liveness and health"),
        (name = "Transfers", description = "Token transfers from the relay account"),
        (name = "Balance", description = "Token balance queries"),
        (name = "Notifications", description = "Email notifications")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use alloy::primitives::U256;
    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::{
        blockchain::TokenAmount,
        testing::{state, StubLedger, StubMailer, RELAY_ADDRESS},
    };

    fn app(ledger: &Arc<StubLedger>, mailer: &Arc<StubMailer>) -> Router {
        router(state(ledger.clone(), mailer.clone()))
    }

    fn default_app() -> (Router, Arc<StubLedger>, Arc<StubMailer>) {
        let ledger = Arc::new(StubLedger::default());
        let mailer = Arc::new(StubMailer::default());
        (app(&ledger, &mailer), ledger, mailer)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    #[tokio::test]
    async fn liveness_returns_plain_text() {
        let (app, _, _) = default_app();
        let response = app.oneshot(get_request("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, health::LIVENESS_MESSAGE);
    }

    #[tokio::test]
    async fn health_reports_network_and_token() {
        let (app, _, _) = default_app();
        let response = app.oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "status": "ok", "network": "nile", "token": "USDT" })
        );
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let (app, _, _) = default_app();
        let response = app.oneshot(get_request("/")).await.unwrap();
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn openapi_document_lists_routes() {
        let (app, _, _) = default_app();
        let response = app.oneshot(get_request("/api-doc/openapi.json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let doc = body_json(response).await;
        for path in ["/", "/health", "/send-usdt", "/balance", "/send-email"] {
            assert!(doc["paths"].get(path).is_some(), "missing {path}");
        }
    }

    #[tokio::test]
    async fn send_usdt_requires_recipient_and_amount() {
        let (app, ledger, _) = default_app();
        let response = app.oneshot(post_json("/send-usdt", "{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_text(response).await,
            r#"{"success":false,"error":"recipient and amount required"}"#
        );
        assert!(ledger.transfers().is_empty());
    }

    #[tokio::test]
    async fn empty_body_counts_as_empty_object() {
        let (app, _, _) = default_app();
        let response = app.oneshot(post_json("/send-usdt", "")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "recipient and amount required"
        );
    }

    #[tokio::test]
    async fn malformed_json_is_rejected_with_error_body() {
        let (app, _, _) = default_app();
        let response = app.oneshot(post_json("/send-usdt", "{not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["success"], false);
    }

    #[tokio::test]
    async fn send_usdt_submits_scaled_transfer() {
        let (app, ledger, _) = default_app();
        let response = app
            .oneshot(post_json(
                "/send-usdt",
                &json!({ "recipient": RELAY_ADDRESS, "amount": "1.5" }).to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "success": true, "txHash": "abc123" })
        );

        let transfers = ledger.transfers();
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].to, RELAY_ADDRESS);
        assert_eq!(transfers[0].amount, TokenAmount::new(U256::from(1_500_000u64)));
    }

    #[tokio::test]
    async fn send_usdt_accepts_form_bodies() {
        let (app, ledger, _) = default_app();
        let request = Request::builder()
            .method("POST")
            .uri("/send-usdt")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!("to={RELAY_ADDRESS}&value=2")))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            ledger.transfers()[0].amount,
            TokenAmount::new(U256::from(2_000_000u64))
        );
    }

    #[tokio::test]
    async fn ledger_failure_is_500_with_message() {
        let ledger = Arc::new(StubLedger {
            ack: Err("insufficient balance".to_string()),
            ..StubLedger::default()
        });
        let mailer = Arc::new(StubMailer::default());
        let response = app(&ledger, &mailer)
            .oneshot(post_json(
                "/send-usdt",
                r#"{"recipient":"TAddr","amount":"1"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "success": false, "error": "insufficient balance" })
        );
    }

    #[tokio::test]
    async fn balance_is_scaled_to_display_units() {
        let (app, ledger, _) = default_app();
        let response = app.oneshot(get_request("/balance")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "success": true, "balance": 2.5 })
        );
        assert_eq!(ledger.balance_queries(), vec![RELAY_ADDRESS.to_string()]);
    }

    #[tokio::test]
    async fn balance_address_override() {
        let (app, ledger, _) = default_app();
        let response = app.oneshot(get_request("/balance?address=TOther")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(ledger.balance_queries(), vec!["TOther".to_string()]);
    }

    #[tokio::test]
    async fn malformed_balance_query_uses_error_body() {
        let (app, ledger, _) = default_app();
        let response = app
            .oneshot(get_request("/balance?address=a&address=b"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[CONTENT_TYPE].to_str().unwrap(),
            "application/json"
        );
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("address"));
        assert!(ledger.balance_queries().is_empty());
    }

    #[tokio::test]
    async fn balance_failure_is_500() {
        let ledger = Arc::new(StubLedger {
            balance: Err("node unavailable".to_string()),
            ..StubLedger::default()
        });
        let mailer = Arc::new(StubMailer::default());
        let response = app(&ledger, &mailer).oneshot(get_request("/balance")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "success": false, "error": "node unavailable" })
        );
    }

    #[tokio::test]
    async fn send_email_requires_all_fields() {
        let (app, _, mailer) = default_app();
        let response = app
            .oneshot(post_json("/send-email", r#"{"to":"a@b.com"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_text(response).await,
            r#"{"success":false,"error":"to, subject, message required"}"#
        );
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn send_email_delivers_one_message() {
        let (app, _, mailer) = default_app();
        let response = app
            .oneshot(post_json(
                "/send-email",
                r#"{"to":"a@b.com","subject":"Hi","message":"Funds arrived"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "success": true, "message": "Email sent" })
        );
        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "a@b.com");
        assert!(sent[0].html.contains("Funds arrived"));
    }

    #[tokio::test]
    async fn mail_failure_is_500() {
        let ledger = Arc::new(StubLedger::default());
        let mailer = Arc::new(StubMailer {
            result: Err("connection refused".to_string()),
            ..StubMailer::default()
        });
        let response = app(&ledger, &mailer)
            .oneshot(post_json(
                "/send-email",
                r#"{"to":"a@b.com","subject":"Hi","message":"m"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "connection refused");
    }
}
