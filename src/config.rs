//! Host configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub connect_secs: u64,
    /// Whole-request limit; `None` lets a request run until it completes or fails.
    pub request_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: String,
    pub port: u16,
    /// Base URL of the procurement backend, without a trailing slash.
    pub backend_url: String,
    pub timeouts: BackendTimeouts,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `BACKEND_URL`: default `http://localhost:8000`
    /// - `BACKEND_CONNECT_TIMEOUT_SECS`: default 10
    /// - `BACKEND_REQUEST_TIMEOUT_SECS`: unset means no request timeout
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let bind_addr = lookup("BIND_ADDR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let backend_url = lookup("BACKEND_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned())
            .trim()
            .trim_end_matches('/')
            .to_owned();
        let timeouts = BackendTimeouts {
            connect_secs: parse_or(
                "BACKEND_CONNECT_TIMEOUT_SECS",
                lookup("BACKEND_CONNECT_TIMEOUT_SECS"),
                DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS,
            )?,
            request_secs: lookup("BACKEND_REQUEST_TIMEOUT_SECS")
                .map(|value| parse_var("BACKEND_REQUEST_TIMEOUT_SECS", value))
                .transpose()?,
        };

        Ok(Self { bind_addr, port, backend_url, timeouts })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    raw.map_or(Ok(default), |value| parse_var(var, value))
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid { var, value })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
