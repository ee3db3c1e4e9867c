use crate::dns_message::Section;
use thiserror::Error;

/// Failure while decoding a message from its wire representation.
///
/// Offsets are absolute positions in the buffer handed to the decoder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("Truncated input at offset {offset}: needed {needed} byte(s), {available} available")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Compression pointer at offset {offset} targets {target}, which does not point backwards")]
    PointerCycle { offset: usize, target: usize },

    #[error("{section} section declares {declared} entries but the message ends after {decoded}")]
    MalformedCount {
        section: Section,
        declared: u16,
        decoded: u16,
    },

    #[error("Unsupported label type 0x{octet:02x} at offset {offset}")]
    UnsupportedLabelType { offset: usize, octet: u8 },

    #[error("Domain name starting at offset {offset} exceeds {length} octets")]
    NameTooLong { offset: usize, length: usize },
}

impl WireError {
    /// True when the input simply ran out of bytes, either mid-entry or
    /// before a declared entry could start.
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            WireError::TruncatedInput { .. } | WireError::MalformedCount { .. }
        )
    }
}

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error(transparent)]
    Wire(#[from] WireError),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Invalid upstream address: {0}")]
    InvalidUpstream(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Transport connection reset by {server}")]
    TransportConnectionReset { server: String },

    #[error("No healthy upstream servers available")]
    TransportNoHealthyServers,

    #[error("All upstream servers are unreachable")]
    TransportAllServersUnreachable,
}
