use log::info;
use std::env;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Variabile (o secret in `.env`) con l'URL dell'endpoint.
pub const ENDPOINT_VAR: &str = "PATH_API_AWS";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
pub const DEFAULT_ENDPOINT: &str =
    "https://2unwigbq3h.execute-api.us-east-1.amazonaws.com/VinosRAG/vinos";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} non valido '{value}': {source}")]
    InvalidEndpoint {
        var: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("{var} deve essere un URL http o https, trovato '{value}'")]
    UnsupportedScheme { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: Url,
    pub timeout: Duration,
    pub log_level: String,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let endpoint = parse_endpoint(&read(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()))?;
        Ok(ClientConfig {
            endpoint,
            timeout: DEFAULT_TIMEOUT,
            log_level: read(LOG_LEVEL_VAR).unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Logs the loaded values; call once the logger is up.
    pub fn log_summary(&self) {
        info!("Client configuration loaded:");
        info!("  Endpoint: {}", self.endpoint);
        info!("  Timeout: {}s", self.timeout.as_secs());
    }

    /// Replaces the endpoint, e.g. from a command line flag.
    pub fn with_endpoint(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.endpoint = parse_endpoint(raw.trim())?;
        Ok(self)
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidEndpoint {
        var: ENDPOINT_VAR,
        value: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::UnsupportedScheme {
            var: ENDPOINT_VAR,
            value: raw.to_string(),
        }),
    }
}
