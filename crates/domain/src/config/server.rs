use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ListenProtocol {
    Udp,
    Tcp,
}

impl fmt::Display for ListenProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListenProtocol::Udp => f.write_str("UDP"),
            ListenProtocol::Tcp => f.write_str("TCP"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    #[serde(default = "default_protocols")]
    pub protocols: Vec<ListenProtocol>,

    #[serde(default = "default_tcp_idle_timeout_secs")]
    pub tcp_idle_timeout_secs: u64,
}

impl ServerConfig {
    pub fn listen_addr(&self) -> String {
        if self.bind_address.contains(':') && !self.bind_address.starts_with('[') {
            format!("[{}]:{}", self.bind_address, self.dns_port)
        } else {
            format!("{}:{}", self.bind_address, self.dns_port)
        }
    }

    pub fn listens_on(&self, protocol: ListenProtocol) -> bool {
        self.protocols.contains(&protocol)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            dns_port: default_dns_port(),
            protocols: default_protocols(),
            tcp_idle_timeout_secs: default_tcp_idle_timeout_secs(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_dns_port() -> u16 {
    9000
}

fn default_protocols() -> Vec<ListenProtocol> {
    vec![ListenProtocol::Udp, ListenProtocol::Tcp]
}

fn default_tcp_idle_timeout_secs() -> u64 {
    10
}
