//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {var}")]
    MissingVar { var: String },
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Typed host configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the external CRM backend, without a trailing slash.
    pub backend_url: String,
    /// TCP port the host binds.
    pub port: u16,
    /// Whether session cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
}

impl AppConfig {
    /// Build the config from environment variables.
    ///
    /// Required:
    /// - `BACKEND_API_URL`: base URL of the CRM backend
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `COOKIE_SECURE`: explicit override; otherwise inferred from
    ///   `PUBLIC_URL` starting with `https://`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `BACKEND_API_URL` is absent or `PORT`
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend_url = std::env::var("BACKEND_API_URL")
            .map_err(|_| ConfigError::MissingVar { var: "BACKEND_API_URL".into() })?
            .trim_end_matches('/')
            .to_owned();

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { backend_url, port, cookie_secure: cookie_secure() })
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("PUBLIC_URL")
        .map(|url| url.starts_with("https://"))
        .unwrap_or(false)
}
