//! Data Transfer Objects for the relay boundary.
//!
//! `CreatePixRequest` is what callers send; `PixTransaction` is the fully
//! populated body forwarded to the provider. The only way from one to the
//! other is [`CreatePixRequest::normalize`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Amount charged when the caller does not send one (R$ 8,90).
pub const DEFAULT_AMOUNT: f64 = 8.90;

/// Description used when the caller does not send one.
pub const DEFAULT_DESCRIPTION: &str = "Mentoria Venda Hoje";

// ─────────────────────────────────────────────────────────────────────────────
// Inbound
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a PIX transaction. Every field is optional.
///
/// Field values are not type-checked here: whatever the caller sent is
/// forwarded, and the provider decides what it accepts. `null` is treated the
/// same as an absent field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatePixRequest {
    /// Amount in BRL (decimal, e.g. 8.90)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>, example = 8.90)]
    pub amount: Option<Value>,
    /// Free-text description shown by the provider
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "Mentoria Venda Hoje")]
    pub description: Option<Value>,
    /// Arbitrary key/value data forwarded untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Value>,
}

impl CreatePixRequest {
    /// Builds the request from an already parsed JSON body.
    ///
    /// Anything other than an object carries no fields and yields the
    /// all-defaults request.
    pub fn from_json(body: Value) -> Self {
        match body {
            Value::Object(mut fields) => Self {
                amount: present(fields.remove("amount")),
                description: present(fields.remove("description")),
                metadata: present(fields.remove("metadata")),
            },
            _ => Self::default(),
        }
    }

    /// Fills in defaults and pins currency and payment method.
    ///
    /// Only absent fields are defaulted; `0`, `""` and `{}` are sent as-is.
    pub fn normalize(self) -> PixTransaction {
        PixTransaction {
            amount: self.amount.unwrap_or_else(|| Value::from(DEFAULT_AMOUNT)),
            currency: Currency::Brl,
            payment_method: PaymentMethod::Pix,
            description: self
                .description
                .unwrap_or_else(|| Value::from(DEFAULT_DESCRIPTION)),
            metadata: self
                .metadata
                .unwrap_or_else(|| Value::Object(Map::new())),
        }
    }
}

fn present(value: Option<Value>) -> Option<Value> {
    value.filter(|v| !v.is_null())
}

// ─────────────────────────────────────────────────────────────────────────────
// Outbound
// ─────────────────────────────────────────────────────────────────────────────

/// Currency accepted by the provider. Only BRL is ever sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Currency {
    #[serde(rename = "BRL")]
    Brl,
}

/// Payment rail requested from the provider. Only PIX is ever sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PaymentMethod {
    #[serde(rename = "PIX")]
    Pix,
}

/// Body of `POST {baseUrl}/transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PixTransaction {
    #[schema(value_type = f64, example = 8.90)]
    pub amount: Value,
    pub currency: Currency,
    pub payment_method: PaymentMethod,
    #[schema(value_type = String, example = "Mentoria Venda Hoje")]
    pub description: Value,
    #[schema(value_type = Object)]
    pub metadata: Value,
}

// ─────────────────────────────────────────────────────────────────────────────
// Relay-generated responses
// ─────────────────────────────────────────────────────────────────────────────

/// Error body returned by the relay. Never carries upstream detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Erro ao criar transação")]
    pub error: String,
}

/// Health check body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "OK")]
    pub status: String,
    #[schema(example = "API Venda Hoje")]
    pub message: String,
}
