//! # Relay Client SDK
//!
//! A typed Rust client for the PIX relay's HTTP surface.
//!
//! Provider responses are opaque to the relay, so they come back as
//! `serde_json::Value`.

use relay_types::CreatePixRequest;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(String),
}

/// PIX relay client.
pub struct RelayClient {
    base_url: String,
    http: Client,
}

impl RelayClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the relay is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Creates a PIX transaction through the relay.
    pub async fn create_pix(&self, req: &CreatePixRequest) -> Result<Value, ClientError> {
        let resp = self
            .http
            .post(format!("{}/api/create-pix", self.base_url))
            .json(req)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Fetches the provider's view of a transaction.
    pub async fn check_transaction(&self, id: &str) -> Result<Value, ClientError> {
        let url = self.check_url(id)?;
        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    fn check_url(&self, id: &str) -> Result<Url, ClientError> {
        let mut url = Url::parse(&format!("{}/api/check-transaction", self.base_url))
            .map_err(|e| ClientError::Url(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::Url(format!("{} cannot be a base", self.base_url)))?
            .push(id);
        Ok(url)
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
