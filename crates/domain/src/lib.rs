//! Ferrous Relay Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_protocol;
pub mod dns_record;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError, DecoderConfig};
pub use dns_message::{
    DomainName, Flags, Header, Message, Opcode, Question, ResourceRecord, ResponseCode, Section,
};
pub use dns_protocol::DnsProtocol;
pub use dns_record::{RecordClass, RecordData, RecordType};
pub use errors::{DomainError, WireError};
