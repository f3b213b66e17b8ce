//! # Relay Provider
//!
//! Outbound adapter implementing [`PaymentProvider`] against the GhostsPays
//! REST API.
//!
//! Every call carries `Authorization: Bearer <secret>` and `Company-ID: <id>`.
//! Non-2xx responses and non-JSON bodies are reported as errors; successful
//! bodies are returned as the raw bytes received.

use reqwest::{Client, RequestBuilder, Url};
use serde::de::IgnoredAny;
use tracing::{debug, instrument};

use relay_types::{
    PaymentProvider, PixTransaction, ProviderCredentials, ProviderError, TransactionId,
    UpstreamResponse,
};

/// Default GhostsPays API root.
pub const DEFAULT_BASE_URL: &str = "https://api.ghostspaysv2.com/functions/v1";

const COMPANY_ID_HEADER: &str = "Company-ID";

/// GhostsPays client bound to one set of credentials.
///
/// Holds a single pooled `reqwest::Client` shared by all requests.
pub struct GhostsPaysProvider {
    credentials: ProviderCredentials,
    http: Client,
}

impl GhostsPaysProvider {
    /// Creates a provider with a default `reqwest::Client` (no explicit timeout).
    pub fn new(credentials: ProviderCredentials) -> Self {
        Self::with_client(credentials, Client::new())
    }

    /// Creates a provider using the given HTTP client.
    pub fn with_client(credentials: ProviderCredentials, http: Client) -> Self {
        Self { credentials, http }
    }

    pub fn credentials(&self) -> &ProviderCredentials {
        &self.credentials
    }

    fn transactions_url(&self) -> Result<Url, ProviderError> {
        let raw = format!("{}/transactions", self.credentials.base_url());
        Url::parse(&raw).map_err(|e| ProviderError::InvalidUrl(format!("{}: {}", raw, e)))
    }

    /// `{baseUrl}/transactions/{id}` with `id` pushed as one path segment.
    fn transaction_url(&self, id: &TransactionId) -> Result<Url, ProviderError> {
        let mut url = self.transactions_url()?;
        url.path_segments_mut()
            .map_err(|_| {
                ProviderError::InvalidUrl(format!("{} cannot be a base", self.credentials.base_url()))
            })?
            .push(id.as_str());
        Ok(url)
    }

    fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
        req.header(reqwest::header::AUTHORIZATION, self.credentials.bearer())
            .header(COMPANY_ID_HEADER, self.credentials.company_id())
    }

    async fn send(&self, req: RequestBuilder) -> Result<UpstreamResponse, ProviderError> {
        let resp = req
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        debug!(status = status.as_u16(), bytes = body.len(), "upstream responded");

        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        // Only checked, never decoded into a type: the body is relayed as-is.
        serde_json::from_slice::<IgnoredAny>(&body)
            .map_err(|e| ProviderError::MalformedBody(e.to_string()))?;

        Ok(UpstreamResponse::new(status.as_u16(), body))
    }
}

#[async_trait::async_trait]
impl PaymentProvider for GhostsPaysProvider {
    #[instrument(skip(self, tx), fields(amount = %tx.amount))]
    async fn create_transaction(
        &self,
        tx: PixTransaction,
    ) -> Result<UpstreamResponse, ProviderError> {
        let url = self.transactions_url()?;
        debug!(%url, "forwarding transaction creation");
        let req = self.authorized(self.http.post(url)).json(&tx);
        self.send(req).await
    }

    #[instrument(skip(self), fields(transaction_id = %id))]
    async fn get_transaction(
        &self,
        id: TransactionId,
    ) -> Result<UpstreamResponse, ProviderError> {
        let url = self.transaction_url(&id)?;
        debug!(%url, "forwarding transaction lookup");
        let req = self.authorized(self.http.get(url));
        self.send(req).await
    }
}
