use ferrous_relay_application::use_cases::ForwardQueryUseCase;
use ferrous_relay_domain::Config;
use ferrous_relay_infrastructure::dns::{DnsForwarder, DnsServerHandler, WireDecoder};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub forwarder: Arc<DnsForwarder>,
    pub handler: DnsServerHandler,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let decoder = Arc::new(WireDecoder::new(config.decoder));
        let forwarder = Arc::new(DnsForwarder::from_config(&config.upstream)?);

        info!(
            upstreams = forwarder.servers().count(),
            max_pointer_depth = config.decoder.max_pointer_depth,
            log_messages = config.logging.log_messages,
            "Initializing relay services"
        );

        let use_case = Arc::new(
            ForwardQueryUseCase::new(decoder, forwarder.clone())
                .with_message_logging(config.logging.log_messages),
        );

        Ok(Self {
            forwarder,
            handler: DnsServerHandler::new(use_case),
        })
    }
}
