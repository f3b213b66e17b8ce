//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use relay_types::dto::{
    CreatePixRequest, Currency, ErrorResponse, HealthResponse, PaymentMethod, PixTransaction,
};
use utoipa::OpenApi;

use crate::inbound::ServiceInfo;

// Dummy functions to generate path documentation.

/// Service description
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service description", body = ServiceInfo)
    )
)]
async fn service_info() {}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
async fn health() {}

/// Create a PIX transaction
///
/// Missing fields are defaulted; currency and payment method are always BRL
/// and PIX. The provider's JSON answer is returned unchanged.
#[utoipa::path(
    post,
    path = "/api/create-pix",
    tag = "pix",
    request_body = CreatePixRequest,
    responses(
        (status = 200, description = "Provider response, passed through", body = inline(serde_json::Value)),
        (status = 500, description = "Provider call failed", body = ErrorResponse,
            example = json!({"error": "Erro ao criar transação"}))
    )
)]
async fn create_pix() {}

/// Check a transaction
#[utoipa::path(
    get,
    path = "/api/check-transaction/{id}",
    tag = "pix",
    params(
        ("id" = String, Path, description = "Transaction ID returned by create-pix")
    ),
    responses(
        (status = 200, description = "Provider response, passed through", body = inline(serde_json::Value)),
        (status = 500, description = "Provider call failed", body = ErrorResponse,
            example = json!({"error": "Erro ao verificar transação"}))
    )
)]
async fn check_transaction() {}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PIX Relay API",
        description = "Relays PIX payment requests to GhostsPays"
    ),
    paths(service_info, health, create_pix, check_transaction),
    components(
        schemas(
            CreatePixRequest,
            PixTransaction,
            Currency,
            PaymentMethod,
            ErrorResponse,
            HealthResponse,
            ServiceInfo,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "pix", description = "PIX transaction relay"),
    )
)]
pub struct ApiDoc;
