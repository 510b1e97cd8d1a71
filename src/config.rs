use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be a port number, got {0:?}")]
    InvalidPort(String),

    #[error("API_DOCS must be true or false, got {0:?}")]
    InvalidFlag(String),
}

/// # Server Configuration
///
/// Read from the process environment (after `.env` is loaded by `main`).
///
/// | Variable   | Default   |
/// |------------|-----------|
/// | `HOST`     | `0.0.0.0` |
/// | `PORT`     | `3000`    |
/// | `API_DOCS` | `false`   |
///
/// Log filtering is controlled separately through `RUST_LOG`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Mount Swagger UI and the OpenAPI document.
    pub api_docs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_docs: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST")
            .filter(|host| !host.is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("PORT").filter(|port| !port.is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        let api_docs = match lookup("API_DOCS").filter(|flag| !flag.is_empty()) {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidFlag(raw))?,
            None => defaults.api_docs,
        };

        Ok(Self {
            host,
            port,
            api_docs,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
