//! HTTP-level tests for the relay routes.
//!
//! The router is driven with `oneshot` against an in-memory provider so the
//! tests observe exactly what the caller sees.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use relay_hex::{RelayService, inbound::HttpServer};
use relay_types::{
    PaymentProvider, PixTransaction, ProviderError, TransactionId, UpstreamResponse,
};
use serde_json::json;
use tower::ServiceExt;

#[derive(Clone, Default)]
struct Calls {
    created: Arc<Mutex<Vec<PixTransaction>>>,
    looked_up: Arc<Mutex<Vec<TransactionId>>>,
}

/// Provider answering every call with the same status and body.
///
/// A 2xx status yields `Ok`, anything else a `ProviderError::Status`.
struct CannedProvider {
    status: u16,
    body: &'static str,
    calls: Calls,
}

impl CannedProvider {
    fn reply(&self) -> Result<UpstreamResponse, ProviderError> {
        if (200..300).contains(&self.status) {
            Ok(UpstreamResponse::new(self.status, self.body))
        } else {
            Err(ProviderError::Status {
                status: self.status,
                body: self.body.to_string(),
            })
        }
    }
}

#[async_trait]
impl PaymentProvider for CannedProvider {
    async fn create_transaction(
        &self,
        tx: PixTransaction,
    ) -> Result<UpstreamResponse, ProviderError> {
        self.calls.created.lock().unwrap().push(tx);
        self.reply()
    }

    async fn get_transaction(
        &self,
        id: TransactionId,
    ) -> Result<UpstreamResponse, ProviderError> {
        self.calls.looked_up.lock().unwrap().push(id);
        self.reply()
    }
}

/// Helper to build a router around a canned provider.
fn app(status: u16, body: &'static str) -> (axum::Router, Calls) {
    let calls = Calls::default();
    let provider = CannedProvider {
        status,
        body,
        calls: calls.clone(),
    };
    let server = HttpServer::new(RelayService::new(provider));
    (server.router(), calls)
}

fn create_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/create-pix")
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn check_request(id: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/api/check-transaction/{}", id))
        .body(Body::empty())
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

#[tokio::test]
async fn test_create_empty_object_forwards_defaults() {
    let (app, calls) = app(201, r#"{"id":"tx_1"}"#);

    let response = app.oneshot(create_request("{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let created = calls.created.lock().unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(
        serde_json::to_value(&created[0]).unwrap(),
        json!({
            "amount": 8.90,
            "currency": "BRL",
            "paymentMethod": "PIX",
            "description": "Mentoria Venda Hoje",
            "metadata": {}
        })
    );
}

#[tokio::test]
async fn test_create_without_body_uses_defaults() {
    let (app, calls) = app(200, "{}");
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/create-pix")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        calls.created.lock().unwrap()[0].description,
        "Mentoria Venda Hoje"
    );
}

#[tokio::test]
async fn test_create_pins_currency_and_method() {
    let (app, calls) = app(200, "{}");

    let response = app
        .oneshot(create_request(
            r#"{"amount": 12.34, "currency": "USD", "paymentMethod": "BOLETO"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let sent = serde_json::to_value(&calls.created.lock().unwrap()[0]).unwrap();
    assert_eq!(sent["amount"], json!(12.34));
    assert_eq!(sent["currency"], "BRL");
    assert_eq!(sent["paymentMethod"], "PIX");
}

#[tokio::test]
async fn test_create_success_body_is_byte_identical() {
    let upstream = "{\"id\": \"tx_9\", \"pix\": {\"qrcode\": \"000201...\"}, \"amount\": 8.90}";
    let (app, _) = app(201, upstream);

    let response = app.oneshot(create_request("{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(&body_bytes(response).await[..], upstream.as_bytes());
}

#[tokio::test]
async fn test_create_upstream_failure_returns_fixed_500() {
    let (app, _) = app(401, r#"{"message":"invalid secret key sk_live_x"}"#);

    let response = app.oneshot(create_request("{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_bytes(response).await;
    assert_eq!(&body[..], r#"{"error":"Erro ao criar transação"}"#.as_bytes());
}

#[tokio::test]
async fn test_create_invalid_json_returns_fixed_500_without_forwarding() {
    let (app, calls) = app(200, "{}");

    let response = app
        .oneshot(create_request(r#"{"amount": 8.90"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json, json!({"error": "Erro ao criar transação"}));
    assert!(calls.created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_string_amount_is_forwarded_as_sent() {
    let upstream = r#"{"id":"tx_str","amount":890}"#;
    let (app, calls) = app(201, upstream);

    let response = app
        .oneshot(create_request(r#"{"amount":"8.90"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(&body_bytes(response).await[..], upstream.as_bytes());
    let created = calls.created.lock().unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].amount, json!("8.90"));
}

#[tokio::test]
async fn test_create_mistyped_fields_are_forwarded_as_sent() {
    let (app, calls) = app(200, "{}");

    let response = app
        .oneshot(create_request(r#"{"metadata":["a"],"description":5}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let created = calls.created.lock().unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].metadata, json!(["a"]));
    assert_eq!(created[0].description, json!(5));
    assert_eq!(created[0].amount, json!(8.90));
}

#[tokio::test]
async fn test_create_non_json_content_type_forwards_defaults() {
    let (app, calls) = app(200, "{}");
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/create-pix")
        .header("Content-Type", "text/plain")
        .body(Body::from(r#"{"amount": 50}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let created = calls.created.lock().unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].amount, json!(8.90));
    assert_eq!(created[0].description, "Mentoria Venda Hoje");
}

#[tokio::test]
async fn test_create_non_object_json_forwards_defaults() {
    for body in ["[]", r#""x""#, "5"] {
        let (app, calls) = app(200, "{}");

        let response = app.oneshot(create_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK, "body {}", body);
        let created = calls.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(
            serde_json::to_value(&created[0]).unwrap(),
            json!({
                "amount": 8.90,
                "currency": "BRL",
                "paymentMethod": "PIX",
                "description": "Mentoria Venda Hoje",
                "metadata": {}
            })
        );
    }
}

#[tokio::test]
async fn test_check_forwards_path_id() {
    let upstream = r#"{"id":"abc123","status":"waiting_payment"}"#;
    let (app, calls) = app(200, upstream);

    let response = app.oneshot(check_request("abc123")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(&body_bytes(response).await[..], upstream.as_bytes());
    assert_eq!(
        *calls.looked_up.lock().unwrap(),
        vec![TransactionId::new("abc123")]
    );
}

#[tokio::test]
async fn test_check_upstream_failure_returns_fixed_500() {
    let (app, _) = app(404, r#"{"message":"Transaction not found"}"#);

    let response = app.oneshot(check_request("missing")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_bytes(response).await;
    assert_eq!(
        &body[..],
        r#"{"error":"Erro ao verificar transação"}"#.as_bytes()
    );
}

#[tokio::test]
async fn test_health() {
    let (app, _) = app(200, "{}");
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json, json!({"status": "OK", "message": "API Venda Hoje"}));
}

#[tokio::test]
async fn test_service_info_and_openapi() {
    let (app, _) = app(200, "{}");

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["status"], "online");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(json["paths"]["/api/create-pix"].is_object());
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (app, _) = app(200, "{}");
    let preflight = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/create-pix")
        .header("Origin", "https://vendahoje.example")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(preflight).await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );

    let mut request = check_request("abc");
    request
        .headers_mut()
        .insert("Origin", "https://other.example".parse().unwrap());
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
