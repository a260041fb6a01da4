use anyhow::Context;
use std::net::SocketAddr;

const DEFAULT_BIND: &str = "0.0.0.0:8000";

/// Server configuration.
///
/// CORS is off by default; enabling it applies a permissive layer for web
/// clients polling the latest reading from a browser.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind: SocketAddr,
    pub enable_cors: bool,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    ///
    /// `TELEMETRY_BIND` overrides the listen address, `TELEMETRY_CORS=1`
    /// enables the CORS layer.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let bind = std::env::var("TELEMETRY_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
        let bind: SocketAddr = bind
            .parse()
            .with_context(|| format!("invalid TELEMETRY_BIND address: {}", bind))?;

        let enable_cors = std::env::var("TELEMETRY_CORS")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self { bind, enable_cors })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // DEFAULT_BIND is a well-formed literal
            bind: DEFAULT_BIND.parse().unwrap(),
            enable_cors: false,
        }
    }
}
