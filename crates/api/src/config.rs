use axum::http::HeaderValue;

/// Errors raised while reading [`ServerConfig`] from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    InvalidNumber {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Invalid CORS origin '{0}'")]
    InvalidOrigin(String),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. In production,
/// override via environment variables (or a `.env` file).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite connection string (default: `sqlite://marquee.db?mode=rwc`).
    pub database_url: String,
    /// Upper bound on pooled store connections (default: `5`).
    pub database_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                       |
    /// |----------------------------|-------------------------------|
    /// | `HOST`                     | `0.0.0.0`                     |
    /// | `PORT`                     | `3000`                        |
    /// | `DATABASE_URL`             | `sqlite://marquee.db?mode=rwc`|
    /// | `DATABASE_MAX_CONNECTIONS` | `5`                           |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`       |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                          |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let port = parse_number("PORT", var("PORT", "3000"), "u16")?;
        let database_url = var("DATABASE_URL", "sqlite://marquee.db?mode=rwc");
        let database_max_connections = parse_number(
            "DATABASE_MAX_CONNECTIONS",
            var("DATABASE_MAX_CONNECTIONS", "5"),
            "u32",
        )?;
        let request_timeout_secs = parse_number(
            "REQUEST_TIMEOUT_SECS",
            var("REQUEST_TIMEOUT_SECS", "30"),
            "u64",
        )?;

        let cors_origins = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            host,
            port,
            database_url,
            database_max_connections,
            cors_origins,
            request_timeout_secs,
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    var: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            var,
            expected,
            value,
        })
}
