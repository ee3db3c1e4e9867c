pub mod decoder;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod upstream;

pub use decoder::DecoderConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::{ListenProtocol, ServerConfig};
pub use upstream::{parse_resolv_conf, UpstreamConfig};
