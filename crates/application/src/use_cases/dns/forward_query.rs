use crate::ports::{MessageDecoder, UpstreamForwarder, UpstreamResponse};
use ferrous_relay_domain::DomainError;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Relays a raw client query upstream and hands back the raw answer.
///
/// Decoding is only used for log output. A message the decoder rejects is
/// still forwarded, and the bytes sent in either direction are never
/// rebuilt from the decoded form.
pub struct ForwardQueryUseCase {
    decoder: Arc<dyn MessageDecoder>,
    forwarder: Arc<dyn UpstreamForwarder>,
    log_messages: bool,
}

impl ForwardQueryUseCase {
    pub fn new(decoder: Arc<dyn MessageDecoder>, forwarder: Arc<dyn UpstreamForwarder>) -> Self {
        Self {
            decoder,
            forwarder,
            log_messages: true,
        }
    }

    /// When disabled, messages are relayed without being decoded at all.
    pub fn with_message_logging(mut self, enabled: bool) -> Self {
        self.log_messages = enabled;
        self
    }

    pub async fn execute(&self, query: &[u8], client: SocketAddr) -> Result<Vec<u8>, DomainError> {
        if self.log_messages {
            self.log_query(query, client);
        }

        let response = self.forwarder.forward(query).await?;

        if self.log_messages {
            self.log_response(&response, client);
        }

        Ok(response.bytes)
    }

    fn log_query(&self, query: &[u8], client: SocketAddr) {
        let message = match self.decoder.decode(query) {
            Ok(message) => message,
            Err(e) => {
                warn!(client = %client, bytes = query.len(), error = %e, "Undecodable query, forwarding as-is");
                return;
            }
        };

        match message.first_question() {
            Some(question) => info!(
                id = message.id(),
                client = %client,
                name = %question.name,
                record_type = %question.record_type,
                class = %question.record_class,
                "Query received"
            ),
            None => info!(id = message.id(), client = %client, "Query received without question"),
        }
        debug!(message = %message, "Decoded query");
    }

    fn log_response(&self, response: &UpstreamResponse, client: SocketAddr) {
        let message = match self.decoder.decode(&response.bytes) {
            Ok(message) => message,
            Err(e) => {
                warn!(
                    upstream = %response.server,
                    bytes = response.bytes.len(),
                    error = %e,
                    "Undecodable upstream response, relaying as-is"
                );
                return;
            }
        };

        let rcode = message.header.flags.rcode();
        debug!(id = message.id(), rcode = %rcode, "Upstream response decoded");
        for record in &message.answers {
            debug!(id = message.id(), record = %record, "Answer");
        }

        info!(
            id = message.id(),
            client = %client,
            rcode = %rcode,
            answers = message.answers.len(),
            upstream = %response.server,
            latency_ms = response.latency_ms,
            "Response relayed"
        );
    }
}
