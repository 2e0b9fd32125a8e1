use std::time::Duration;

/// Upstream connection settings, resolved once at process startup and passed
/// into the router state. Handlers never read the environment directly, so
/// tests can point the relay at a stub upstream.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Base URL of the OpenAI-compatible server, e.g. `http://localhost:8000/v1`.
    pub base_url: String,
    /// Model identifier sent with every completion request.
    pub model: String,
    /// Bearer credential; local vLLM deployments conventionally use `EMPTY`.
    pub api_key: String,
    /// Overall outbound request timeout in seconds.
    pub timeout_secs: u64,
    /// Optional sampling temperature forwarded upstream when set.
    pub temperature: Option<f64>,
    /// Optional completion token cap forwarded upstream when set.
    pub max_tokens: Option<u32>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/v1".into(),
            model: "qwen3-vl".into(),
            api_key: "EMPTY".into(),
            timeout_secs: 60,
            temperature: None,
            max_tokens: None,
        }
    }
}

impl RelayConfig {
    /// Build the configuration from environment variables, falling back to
    /// the defaults above for anything unset or empty.
    ///
    /// Environment:
    /// - UPSTREAM_BASE_URL                 -> base_url
    /// - MODEL                             -> model
    /// - UPSTREAM_API_KEY                  -> api_key
    /// - CHATRELAY_HTTP_TIMEOUT_SECONDS    -> timeout_secs (u64)
    /// - CHATRELAY_TEMPERATURE             -> temperature (f64, optional)
    /// - CHATRELAY_MAX_TOKENS              -> max_tokens (u32, optional)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let base_url = env_nonempty("UPSTREAM_BASE_URL").unwrap_or(defaults.base_url);
        let model = env_nonempty("MODEL").unwrap_or(defaults.model);
        let api_key = env_nonempty("UPSTREAM_API_KEY").unwrap_or(defaults.api_key);

        let timeout_secs = env_nonempty("CHATRELAY_HTTP_TIMEOUT_SECONDS")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(defaults.timeout_secs);

        let temperature =
            env_nonempty("CHATRELAY_TEMPERATURE").and_then(|s| s.parse::<f64>().ok());
        let max_tokens = env_nonempty("CHATRELAY_MAX_TOKENS").and_then(|s| s.parse::<u32>().ok());

        Self {
            base_url,
            model,
            api_key,
            timeout_secs,
            temperature,
            max_tokens,
        }
    }

    /// The outbound request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
