//! Server configuration from Shuttle secrets

use std::time::Duration;

use crate::adapters::gemini::DEFAULT_GEMINI_URL;

/// Runtime configuration resolved at start-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub gemini_api_key: String,
    pub gemini_api_url: String,
    /// Outbound request timeout; `None` keeps the HTTP client default
    pub gemini_timeout: Option<Duration>,
    /// Bearer token for `/api/*`; `None` disables authentication
    pub api_key: Option<String>,
}

impl ServerConfig {
    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> Self {
        Self::from_lookup(|key| secrets.get(key))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let gemini_api_key = lookup("GEMINI_API_KEY").unwrap_or_else(|| {
            tracing::warn!("⚠️  No GEMINI_API_KEY set - generation requests will fail");
            String::new()
        });

        let gemini_api_url = lookup("GEMINI_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GEMINI_URL.to_string());

        let gemini_timeout = lookup("GEMINI_TIMEOUT_SECS").and_then(|raw| {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    tracing::warn!("⚠️  Ignoring invalid GEMINI_TIMEOUT_SECS: {}", raw);
                    None
                }
            }
        });

        let api_key = lookup("AUTOPROMPT_API_KEY").filter(|key| !key.is_empty());

        Self {
            gemini_api_key,
            gemini_api_url,
            gemini_timeout,
            api_key,
        }
    }
}
