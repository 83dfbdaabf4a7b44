//! Server configuration from environment variables.
//!
//! | Variable                 | Default                                                 |
//! |--------------------------|---------------------------------------------------------|
//! | `BIND_ADDR`              | `0.0.0.0`                                               |
//! | `PORT`                   | `3000`                                                  |
//! | `SOILGRIDS_URL`          | `https://rest.isric.org/soilgrids/v2.0/properties/query` |
//! | `SOILGRIDS_TIMEOUT_SECS` | `10`                                                    |
//! | `SOILGRIDS_ENABLED`      | `true`                                                  |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::analysis::{SoilAnalyzer, DEFAULT_FETCH_TIMEOUT};
use crate::soilgrids::{SoilGridsClient, DEFAULT_SOILGRIDS_URL};

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub soilgrids_url: String,
    pub soilgrids_timeout: Duration,
    pub soilgrids_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            soilgrids_url: DEFAULT_SOILGRIDS_URL.to_string(),
            soilgrids_timeout: DEFAULT_FETCH_TIMEOUT,
            soilgrids_enabled: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values keep their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let timeout_secs: Option<u64> = parse_var(&lookup, "SOILGRIDS_TIMEOUT_SECS");

        Self {
            bind_addr: parse_var(&lookup, "BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: parse_var(&lookup, "PORT").unwrap_or(defaults.port),
            soilgrids_url: lookup("SOILGRIDS_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(defaults.soilgrids_url),
            soilgrids_timeout: timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.soilgrids_timeout),
            soilgrids_enabled: lookup("SOILGRIDS_ENABLED")
                .and_then(|v| parse_flag("SOILGRIDS_ENABLED", &v))
                .unwrap_or(defaults.soilgrids_enabled),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    /// Analyzer wired to SoilGrids, or offline when disabled.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built.
    pub fn build_analyzer(&self) -> anyhow::Result<SoilAnalyzer> {
        if !self.soilgrids_enabled {
            tracing::info!("SoilGrids disabled; all analyses use estimated data");
            return Ok(SoilAnalyzer::offline());
        }

        let client = SoilGridsClient::new(&self.soilgrids_url, self.soilgrids_timeout)?;
        Ok(SoilAnalyzer::with_source(Arc::new(client), self.soilgrids_timeout))
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid {}={:?}; using default", key, raw);
            None
        }
    }
}

fn parse_flag(key: &str, raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            tracing::warn!("Ignoring invalid {}={:?}; using default", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg, ServerConfig::default());
        assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let cfg = config(&[
            ("PORT", "8080"),
            ("BIND_ADDR", "127.0.0.1"),
            ("SOILGRIDS_URL", "http://localhost:9000/query"),
            ("SOILGRIDS_TIMEOUT_SECS", "3"),
            ("SOILGRIDS_ENABLED", "off"),
        ]);
        assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(cfg.soilgrids_url, "http://localhost:9000/query");
        assert_eq!(cfg.soilgrids_timeout, Duration::from_secs(3));
        assert!(!cfg.soilgrids_enabled);
        assert!(!cfg.build_analyzer().unwrap().has_source());
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let cfg = config(&[("PORT", "eighty"), ("SOILGRIDS_ENABLED", "maybe"), ("SOILGRIDS_URL", " ")]);
        assert_eq!(cfg, ServerConfig::default());
    }
}
