mod message_decoder;
mod upstream_forwarder;

pub use message_decoder::MessageDecoder;
pub use upstream_forwarder::{UpstreamForwarder, UpstreamResponse};
