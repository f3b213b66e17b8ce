//! Payment provider port.
//!
//! Implemented by the GhostsPays HTTP adapter and by in-memory mocks in tests.

use crate::{PixTransaction, ProviderError, TransactionId, UpstreamResponse};

/// Port trait for the upstream payment provider.
///
/// Implementations make exactly one upstream request per call and never
/// retry. A returned `Ok` always holds a 2xx response with a JSON body.
#[async_trait::async_trait]
pub trait PaymentProvider: Send + Sync + 'static {
    /// `POST {baseUrl}/transactions` with the normalized transaction.
    async fn create_transaction(
        &self,
        tx: PixTransaction,
    ) -> Result<UpstreamResponse, ProviderError>;

    /// `GET {baseUrl}/transactions/{id}`.
    async fn get_transaction(&self, id: TransactionId)
    -> Result<UpstreamResponse, ProviderError>;
}
