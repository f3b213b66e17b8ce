//! Relay Application Service
//!
//! Turns inbound requests into provider calls through the `PaymentProvider`
//! port and collapses every failure into the boundary error for the
//! operation. Contains NO HTTP logic.

use std::future::Future;
use std::sync::Arc;

use relay_types::{
    AppError, CreatePixRequest, PaymentProvider, ProviderError, TransactionId, UpstreamResponse,
};

/// Application service for the relay operations.
///
/// Generic over `P: PaymentProvider` - the adapter is injected at startup.
/// The provider sits behind an `Arc` so each outbound call can run on its
/// own task.
pub struct RelayService<P: PaymentProvider> {
    provider: Arc<P>,
}

impl<P: PaymentProvider> RelayService<P> {
    /// Creates a new relay service with the given provider.
    pub fn new(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Normalizes the request and forwards it to the provider's creation endpoint.
    #[tracing::instrument(skip(self, req))]
    pub async fn create_pix(&self, req: CreatePixRequest) -> Result<UpstreamResponse, AppError> {
        let tx = req.normalize();
        tracing::debug!(amount = %tx.amount, description = %tx.description, "normalized transaction");

        let provider = Arc::clone(&self.provider);
        detached(async move { provider.create_transaction(tx).await })
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Erro GhostsPays: create transaction failed");
                AppError::CreateFailed
            })
    }

    /// Forwards a status lookup for the given transaction.
    #[tracing::instrument(skip(self), fields(transaction_id = %id))]
    pub async fn check_transaction(&self, id: TransactionId) -> Result<UpstreamResponse, AppError> {
        let provider = Arc::clone(&self.provider);
        detached(async move { provider.get_transaction(id).await })
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Erro GhostsPays: check transaction failed");
                AppError::CheckFailed
            })
    }
}

/// Runs an upstream call on its own task.
///
/// If the caller goes away the handler future is dropped, but the spawned
/// call still runs to completion.
async fn detached<F>(call: F) -> Result<UpstreamResponse, ProviderError>
where
    F: Future<Output = Result<UpstreamResponse, ProviderError>> + Send + 'static,
{
    tokio::spawn(call)
        .await
        .map_err(|e| ProviderError::Aborted(e.to_string()))?
}
