//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::str::FromStr;

use grouping::consts::WEB_CANVAS_WIDTH;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_SESSION_CAPACITY: usize = 10_000;
/// Where the canvas page bundle is built, with the WASM under `pkg/`.
pub const DEFAULT_SITE_ROOT: &str = "target/site";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    #[error("{key} must be greater than zero")]
    NotPositive { key: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Canvas width the page lays tokens out against.
    pub canvas_width: f64,
    pub cookie_secure: bool,
    /// Sessions kept in memory before the least recently seen is evicted.
    pub session_capacity: usize,
    /// Directory whose `pkg/` holds the canvas page's WASM bundle.
    pub site_root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            port: DEFAULT_PORT,
            canvas_width: WEB_CANVAS_WIDTH,
            cookie_secure: false,
            session_capacity: DEFAULT_SESSION_CAPACITY,
            site_root: PathBuf::from(DEFAULT_SITE_ROOT),
        }
    }
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `CANVAS_WIDTH`: default 800, must be positive
    /// - `COOKIE_SECURE`: `1/true/yes/on` or `0/false/no/off`, default off
    /// - `SESSION_CAPACITY`: default 10000, must be positive
    /// - `SITE_ROOT`: default `target/site`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injected variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = parse_or(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR)?;
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;

        let canvas_width: f64 = parse_or(&lookup, "CANVAS_WIDTH", WEB_CANVAS_WIDTH)?;
        if !canvas_width.is_finite() || canvas_width <= 0.0 {
            return Err(ConfigError::NotPositive { key: "CANVAS_WIDTH" });
        }

        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| invalid("COOKIE_SECURE", &raw))?,
            None => false,
        };

        let session_capacity = parse_or(&lookup, "SESSION_CAPACITY", DEFAULT_SESSION_CAPACITY)?;
        if session_capacity == 0 {
            return Err(ConfigError::NotPositive { key: "SESSION_CAPACITY" });
        }

        let site_root = lookup("SITE_ROOT").map_or_else(|| PathBuf::from(DEFAULT_SITE_ROOT), PathBuf::from);

        Ok(Self { bind_addr, port, canvas_width, cookie_secure, session_capacity, site_root })
    }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid { key, value: value.to_owned() }
}

fn parse_or<T, L>(lookup: &L, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    L: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|_| invalid(key, &raw)),
        None => Ok(default),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
