//! Host configuration.
//!
//! The handler itself takes no configuration. Hosts that serve it need a
//! listen address, a function name to report in invocation contexts, and
//! the metrics exporter settings. Defaults are fixed literals; each value
//! can be overridden from the environment.

use std::fmt;
use std::net::SocketAddr;

/// Environment variable overriding [`HostConfig::listen_addr`].
pub const ENV_LISTEN_ADDR: &str = "API_LISTEN_ADDR";
/// Environment variable overriding [`HostConfig::function_name`].
pub const ENV_FUNCTION_NAME: &str = "FUNCTION_NAME";
/// Environment variable overriding [`MetricsConfig::enabled`].
pub const ENV_METRICS_ENABLED: &str = "METRICS_ENABLED";
/// Environment variable overriding [`MetricsConfig::listen_addr`].
pub const ENV_METRICS_LISTEN_ADDR: &str = "METRICS_LISTEN_ADDR";

/// Errors raised while reading configuration overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Value could not be parsed as a socket address.
    InvalidAddr { var: &'static str, value: String },
    /// Value could not be parsed as a boolean.
    InvalidBool { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAddr { var, value } => {
                write!(f, "{var}: invalid socket address {value:?}")
            }
            ConfigError::InvalidBool { var, value } => {
                write!(f, "{var}: expected true/false, got {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuration for the Prometheus metrics exporter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricsConfig {
    /// Whether to run a `/metrics` HTTP exporter.
    pub enabled: bool,
    /// Address to bind the metrics HTTP server to.
    pub listen_addr: SocketAddr,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        // Safe to unwrap: this is a fixed, valid address literal.
        let addr: SocketAddr = "127.0.0.1:9898"
            .parse()
            .expect("hard-coded metrics listen address should parse");
        Self {
            enabled: true,
            listen_addr: addr,
        }
    }
}

/// Top-level configuration for a host serving the handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    /// Address to bind the HTTP server to.
    pub listen_addr: SocketAddr,
    /// Name reported as `functionName` in invocation contexts.
    pub function_name: String,
    pub metrics: MetricsConfig,
}

impl Default for HostConfig {
    fn default() -> Self {
        // Bind to all interfaces so a container port mapping is reachable
        // from the host.
        let addr: SocketAddr = "0.0.0.0:8081"
            .parse()
            .expect("hard-coded API listen address should parse");
        Self {
            listen_addr: addr,
            function_name: "baseline-health".to_string(),
            metrics: MetricsConfig::default(),
        }
    }
}

impl HostConfig {
    /// Builds a config from defaults overridden by process environment
    /// variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from defaults overridden by whatever `lookup`
    /// returns for each known variable. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();

        if let Some(value) = get(ENV_LISTEN_ADDR) {
            cfg.listen_addr = parse_addr(ENV_LISTEN_ADDR, value)?;
        }
        if let Some(value) = get(ENV_FUNCTION_NAME) {
            cfg.function_name = value.trim().to_string();
        }
        if let Some(value) = get(ENV_METRICS_ENABLED) {
            cfg.metrics.enabled = parse_bool(ENV_METRICS_ENABLED, value)?;
        }
        if let Some(value) = get(ENV_METRICS_LISTEN_ADDR) {
            cfg.metrics.listen_addr = parse_addr(ENV_METRICS_LISTEN_ADDR, value)?;
        }

        Ok(cfg)
    }
}

fn parse_addr(var: &'static str, value: String) -> Result<SocketAddr, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidAddr { var, value })
}

fn parse_bool(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn no_overrides_yields_defaults() {
        let cfg = HostConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, HostConfig::default());
        assert_eq!(cfg.listen_addr.port(), 8081);
        assert!(cfg.metrics.enabled);
        assert_eq!(cfg.metrics.listen_addr.port(), 9898);
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = HostConfig::from_lookup(lookup_from(&[
            (ENV_LISTEN_ADDR, "127.0.0.1:3000"),
            (ENV_FUNCTION_NAME, " flags-health "),
            (ENV_METRICS_ENABLED, "off"),
            (ENV_METRICS_LISTEN_ADDR, "0.0.0.0:9100"),
        ]))
        .unwrap();

        assert_eq!(cfg.listen_addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.function_name, "flags-health");
        assert!(!cfg.metrics.enabled);
        assert_eq!(cfg.metrics.listen_addr, "0.0.0.0:9100".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let cfg = HostConfig::from_lookup(lookup_from(&[
            (ENV_LISTEN_ADDR, "  "),
            (ENV_FUNCTION_NAME, ""),
        ]))
        .unwrap();
        assert_eq!(cfg, HostConfig::default());
    }

    #[test]
    fn bad_address_is_rejected() {
        let err = HostConfig::from_lookup(lookup_from(&[(ENV_LISTEN_ADDR, "localhost")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidAddr {
                var: ENV_LISTEN_ADDR,
                value: "localhost".to_string(),
            }
        );
        assert!(err.to_string().contains("API_LISTEN_ADDR"));
    }

    #[test]
    fn bad_bool_is_rejected() {
        let err = HostConfig::from_lookup(lookup_from(&[(ENV_METRICS_ENABLED, "maybe")]))
            .unwrap_err();
        match err {
            ConfigError::InvalidBool { var, value } => {
                assert_eq!(var, ENV_METRICS_ENABLED);
                assert_eq!(value, "maybe");
            }
            _ => panic!("unexpected error variant: {err:?}"),
        }
    }
}
