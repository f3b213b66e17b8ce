//! Domain types.

mod credentials;
mod transaction;

pub use credentials::ProviderCredentials;
pub use transaction::{TransactionId, UpstreamResponse};
