use crate::dns::transport::{create_transport, Transport};
use async_trait::async_trait;
use ferrous_relay_application::ports::{UpstreamForwarder, UpstreamResponse};
use ferrous_relay_domain::config::UpstreamConfig;
use ferrous_relay_domain::{DnsProtocol, DomainError};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

struct Upstream {
    protocol: DnsProtocol,
    transport: Transport,
}

/// Forwards raw queries to an ordered list of upstreams.
///
/// Servers are tried one after another; the first one that returns a
/// response wins. Each attempt gets the full per-server timeout.
pub struct DnsForwarder {
    upstreams: Vec<Upstream>,
    timeout: Duration,
}

impl DnsForwarder {
    pub fn new(servers: Vec<DnsProtocol>, timeout: Duration) -> Self {
        let upstreams = servers
            .into_iter()
            .map(|protocol| Upstream {
                transport: create_transport(&protocol),
                protocol,
            })
            .collect();
        Self { upstreams, timeout }
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self, DomainError> {
        let servers = config
            .endpoints()
            .map_err(|e| DomainError::InvalidUpstream(e.to_string()))?;
        Ok(Self::new(servers, Duration::from_millis(config.timeout_ms)))
    }

    pub fn servers(&self) -> impl Iterator<Item = &DnsProtocol> {
        self.upstreams.iter().map(|upstream| &upstream.protocol)
    }
}

#[async_trait]
impl UpstreamForwarder for DnsForwarder {
    async fn forward(&self, query: &[u8]) -> Result<UpstreamResponse, DomainError> {
        if self.upstreams.is_empty() {
            return Err(DomainError::TransportNoHealthyServers);
        }
        debug!(strategy = "failover", servers = self.upstreams.len(), "Trying sequentially");

        for (index, upstream) in self.upstreams.iter().enumerate() {
            let start = Instant::now();
            match upstream.transport.send(query, self.timeout).await {
                Ok(response) => {
                    let latency_ms = start.elapsed().as_millis() as u64;
                    debug!(
                        server = %upstream.protocol,
                        protocol = response.protocol_used,
                        latency_ms,
                        position = index,
                        "Server responded"
                    );
                    return Ok(UpstreamResponse {
                        bytes: response.bytes,
                        server: upstream.protocol.to_string(),
                        latency_ms,
                    });
                }
                Err(e) => {
                    warn!(protocol = %upstream.protocol, error = %e, position = index, "Failing over");
                }
            }
        }
        Err(DomainError::TransportAllServersUnreachable)
    }
}
