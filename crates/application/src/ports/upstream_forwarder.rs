use async_trait::async_trait;
use ferrous_relay_domain::DomainError;

#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    /// Raw response exactly as the upstream sent it.
    pub bytes: Vec<u8>,
    /// Display form of the upstream that answered, e.g. `udp://8.8.8.8:53`.
    pub server: String,
    pub latency_ms: u64,
}

#[async_trait]
pub trait UpstreamForwarder: Send + Sync {
    /// Sends the query bytes unmodified and returns the first usable answer.
    async fn forward(&self, query: &[u8]) -> Result<UpstreamResponse, DomainError>;
}
