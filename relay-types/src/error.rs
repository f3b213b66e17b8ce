//! Error types for the relay.

/// Failures talking to the upstream provider.
///
/// These carry diagnostic detail for the server log only. At the HTTP
/// boundary every variant collapses into a single [`AppError`].
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Upstream returned a non-JSON body: {0}")]
    MalformedBody(String),

    #[error("Upstream call aborted: {0}")]
    Aborted(String),
}

/// Application-level errors (for HTTP responses).
///
/// One kind of failure, "upstream call failed", split by operation so each
/// route can answer with its own fixed message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Erro ao criar transação")]
    CreateFailed,

    #[error("Erro ao verificar transação")]
    CheckFailed,
}
