use ferrous_relay_domain::{Message, WireError};

/// Turns a raw wire-format message into its structured view.
///
/// Decoding is pure and synchronous; implementations must not perform I/O.
pub trait MessageDecoder: Send + Sync {
    fn decode(&self, buf: &[u8]) -> Result<Message, WireError>;
}
