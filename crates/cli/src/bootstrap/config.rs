use ferrous_relay_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// Summarizes the effective configuration once logging is up.
///
/// `path` is the file the configuration was read from, if any.
pub fn log_config(config: &Config, path: Option<&str>) {
    info!(
        source = config_source(path),
        listen = %config.server.listen_addr(),
        protocols = ?config.server.protocols,
        upstreams = ?config.upstream.servers,
        timeout_ms = config.upstream.timeout_ms,
        "Configuration loaded"
    );
}

fn config_source(path: Option<&str>) -> &str {
    path.unwrap_or("defaults")
}
