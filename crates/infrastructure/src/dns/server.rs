use ferrous_relay_application::use_cases::ForwardQueryUseCase;
use ferrous_relay_domain::config::ListenProtocol;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::error;

/// Entry point for messages read by the UDP and TCP listeners.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<ForwardQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ForwardQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns the bytes to send back to the client, or `None` when the
    /// query could not be forwarded. Nothing is synthesized in that case:
    /// UDP drops the request and TCP closes the connection.
    pub async fn handle_raw(
        &self,
        query: &[u8],
        client: SocketAddr,
        protocol: ListenProtocol,
    ) -> Option<Vec<u8>> {
        match self.use_case.execute(query, client).await {
            Ok(response) => Some(response),
            Err(e) => {
                error!(client = %client, protocol = %protocol, error = %e, "Query forwarding failed");
                None
            }
        }
    }
}
