use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::decoder::DecoderConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-relay.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-relay/config.toml";

/// Main configuration structure for Ferrous Relay
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// Listener configuration (bind address, port, protocols)
    pub server: ServerConfig,

    /// Upstream resolvers queries are relayed to
    pub upstream: UpstreamConfig,

    /// Wire decoder limits
    pub decoder: DecoderConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-relay.toml in current directory
    /// 3. /etc/ferrous-relay/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match Self::config_path(path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        config.normalize_upstreams();
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(servers) = overrides.upstream_servers {
            if !servers.is_empty() {
                self.upstream.servers = servers;
            }
        }
        if overrides.no_resolv_conf {
            self.upstream.use_resolv_conf = false;
        }
    }

    /// Append resolv.conf nameservers to the upstream list
    ///
    /// Only the first readable path is used. The relay's own listen address
    /// is never added, to avoid forwarding to itself.
    fn normalize_upstreams(&mut self) {
        if !self.upstream.use_resolv_conf {
            return;
        }
        let own_addr = self.server.listen_addr().parse::<SocketAddr>().ok();
        let contents = self
            .upstream
            .resolv_conf_paths
            .iter()
            .find_map(|path| std::fs::read_to_string(path).ok());
        if let Some(contents) = contents {
            self.upstream.merge_resolv_conf(&contents, own_addr);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.protocols.is_empty() {
            return Err(ConfigError::Validation(
                "No listener protocols configured".to_string(),
            ));
        }

        if self.upstream.servers.is_empty() {
            return Err(ConfigError::Validation(
                "No upstream servers configured".to_string(),
            ));
        }

        self.upstream.endpoints()?;

        if self.upstream.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Upstream timeout cannot be 0".to_string(),
            ));
        }

        if self.decoder.max_pointer_depth == 0 {
            return Err(ConfigError::Validation(
                "Decoder pointer depth cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// The file [`Config::load`] reads for the given explicit path, or
    /// `None` when the built-in defaults apply.
    pub fn config_path(explicit: Option<&str>) -> Option<String> {
        if let Some(path) = explicit {
            Some(path.to_string())
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
    pub upstream_servers: Option<Vec<String>>,
    pub no_resolv_conf: bool,
}
