//! Configuration loading from environment.
//!
//! Provider credentials come from the environment or from files mounted by a
//! secret store (`<NAME>_FILE`). Nothing is embedded in the binary.

use std::env;

use relay_provider::DEFAULT_BASE_URL;
use relay_types::ProviderCredentials;

/// Output format of the log stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub credentials: ProviderCredentials,
    pub log_format: LogFormat,
    /// Export spans over OTLP (set when `OTEL_EXPORTER_OTLP_ENDPOINT` is present).
    pub otlp: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("PORT must be a valid port number: {}", e))?;

        let base_url = lookup("GHOSTSPAYS_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let secret_key = secret(&lookup, "GHOSTSPAYS_SECRET_KEY")?;
        let company_id = secret(&lookup, "GHOSTSPAYS_COMPANY_ID")?;

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        let otlp = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").is_some_and(|v| !v.is_empty());

        Ok(Self {
            port,
            credentials: ProviderCredentials::new(secret_key, company_id, base_url),
            log_format,
            otlp,
        })
    }
}

/// Reads `name` directly, falling back to the file named by `<name>_FILE`.
fn secret(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> anyhow::Result<String> {
    if let Some(value) = lookup(name).filter(|v| !v.is_empty()) {
        return Ok(value);
    }

    let file_var = format!("{}_FILE", name);
    let path = lookup(&file_var).ok_or_else(|| {
        anyhow::anyhow!("{} (or {}) environment variable is required", name, file_var)
    })?;

    let value = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("failed to read {} from {}: {}", name, path, e))?;
    let value = value.trim().to_string();
    if value.is_empty() {
        anyhow::bail!("{} file {} is empty", name, path);
    }
    Ok(value)
}
