//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use relay_types::{
    AppError, CreatePixRequest, ErrorResponse, HealthResponse, PaymentProvider, TransactionId,
    UpstreamResponse,
};

use crate::{RelayService, openapi::ApiDoc};

/// Application state shared across handlers.
pub struct AppState<P: PaymentProvider> {
    pub service: RelayService<P>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.0.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Upstream JSON relayed verbatim with status 200.
struct Relayed(UpstreamResponse);

impl IntoResponse for Relayed {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            self.0.body,
        )
            .into_response()
    }
}

/// True for `application/json` and `application/*+json`, parameters ignored.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Parses the create body.
///
/// Only JSON bodies are read; any other content type, an empty body, or a
/// JSON value that is not an object carries no fields. Field values are not
/// checked, so the only failure is a JSON body that does not parse.
pub(crate) fn parse_create_body(
    headers: &HeaderMap,
    body: &[u8],
) -> Result<CreatePixRequest, serde_json::Error> {
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CreatePixRequest::default());
    }
    let value: serde_json::Value = serde_json::from_slice(body)?;
    Ok(CreatePixRequest::from_json(value))
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "OK".into(),
        message: "API Venda Hoje".into(),
    })
}

/// Service description returned by `GET /`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    #[schema(example = "Venda Hoje - PIX Relay")]
    pub api: String,
    #[schema(example = "0.1.0")]
    pub version: String,
    #[schema(example = "online")]
    pub status: String,
    /// Route -> method and path
    #[schema(value_type = Object)]
    pub endpoints: serde_json::Value,
}

pub async fn info() -> impl IntoResponse {
    Json(ServiceInfo {
        api: "Venda Hoje - PIX Relay".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        status: "online".into(),
        endpoints: serde_json::json!({
            "create_pix": "POST /api/create-pix",
            "check_transaction": "GET /api/check-transaction/{id}",
            "health": "GET /health",
            "openapi": "GET /api-docs/openapi.json",
        }),
    })
}

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Create a PIX transaction at the provider.
#[tracing::instrument(skip(state, headers, body), fields(bytes = body.len()))]
pub async fn create_pix<P: PaymentProvider>(
    State(state): State<Arc<AppState<P>>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let req = parse_create_body(&headers, &body).map_err(|e| {
        tracing::error!(error = %e, "unreadable create-pix body");
        AppError::CreateFailed
    })?;

    let resp = state.service.create_pix(req).await?;
    Ok(Relayed(resp))
}

/// Check a transaction's status at the provider.
#[tracing::instrument(skip(state), fields(transaction_id = %id))]
pub async fn check_transaction<P: PaymentProvider>(
    State(state): State<Arc<AppState<P>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let resp = state
        .service
        .check_transaction(TransactionId::new(id))
        .await?;
    Ok(Relayed(resp))
}
