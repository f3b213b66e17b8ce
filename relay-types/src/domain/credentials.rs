//! Upstream provider credentials.

/// Static credentials for the upstream payment provider.
///
/// Built once at startup and injected into the provider adapter. There is no
/// runtime mutation and no reload.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderCredentials {
    secret_key: String,
    company_id: String,
    base_url: String,
}

impl ProviderCredentials {
    /// Creates a new credential set. Trailing slashes on the base URL are dropped.
    pub fn new(
        secret_key: impl Into<String>,
        company_id: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            secret_key: secret_key.into(),
            company_id: company_id.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn company_id(&self) -> &str {
        &self.company_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Value of the `Authorization` header sent on every upstream call.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.secret_key)
    }
}

impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("secret_key", &"<redacted>")
            .field("company_id", &self.company_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}
