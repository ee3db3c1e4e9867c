use super::errors::ConfigError;
use crate::dns_protocol::{DnsProtocol, DEFAULT_DNS_PORT};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Tried in order; the first server that answers wins.
    #[serde(default = "default_servers")]
    pub servers: Vec<String>,

    /// Per-server timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_true")]
    pub use_resolv_conf: bool,

    #[serde(default = "default_resolv_conf_paths")]
    pub resolv_conf_paths: Vec<String>,
}

impl UpstreamConfig {
    pub fn endpoints(&self) -> Result<Vec<DnsProtocol>, ConfigError> {
        self.servers
            .iter()
            .map(|server| server.parse::<DnsProtocol>().map_err(ConfigError::Validation))
            .collect()
    }

    /// Appends the nameservers found in `contents` (resolv.conf syntax),
    /// skipping servers already configured and `own_addr`.
    ///
    /// Returns the number of servers added.
    pub fn merge_resolv_conf(&mut self, contents: &str, own_addr: Option<SocketAddr>) -> usize {
        let known: Vec<SocketAddr> = self
            .endpoints()
            .unwrap_or_default()
            .iter()
            .map(DnsProtocol::socket_addr)
            .collect();

        let mut added = 0;
        for ip in parse_resolv_conf(contents) {
            let addr = SocketAddr::new(ip, DEFAULT_DNS_PORT);
            if known.contains(&addr) || own_addr == Some(addr) {
                continue;
            }
            let entry = addr.to_string();
            if self.servers.contains(&entry) {
                continue;
            }
            self.servers.push(entry);
            added += 1;
        }
        added
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            servers: default_servers(),
            timeout_ms: default_timeout_ms(),
            use_resolv_conf: true,
            resolv_conf_paths: default_resolv_conf_paths(),
        }
    }
}

/// Extracts `nameserver` addresses from resolv.conf contents.
///
/// Comments (`#`, `;`), other directives and unparsable addresses are
/// ignored. IPv6 zone suffixes (`fe80::1%eth0`) are dropped.
pub fn parse_resolv_conf(contents: &str) -> Vec<IpAddr> {
    contents
        .lines()
        .map(|line| line.split(['#', ';']).next().unwrap_or_default().trim())
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            match parts.next() {
                Some("nameserver") => parts.next(),
                _ => None,
            }
        })
        .filter_map(|addr| addr.split('%').next()?.parse::<IpAddr>().ok())
        .collect()
}

fn default_servers() -> Vec<String> {
    vec!["8.8.8.8:53".to_string()]
}

fn default_timeout_ms() -> u64 {
    3000
}

fn default_true() -> bool {
    true
}

fn default_resolv_conf_paths() -> Vec<String> {
    vec!["/etc/resolv.conf".to_string()]
}
