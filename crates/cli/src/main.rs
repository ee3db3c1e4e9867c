use clap::Parser;
use ferrous_relay_domain::{CliOverrides, Config};
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-relay")]
#[command(version)]
#[command(about = "Ferrous Relay - DNS forwarder that logs decoded traffic")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS listen port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Upstream server (repeatable; replaces the configured list)
    #[arg(short = 'u', long = "upstream", value_name = "ADDR")]
    upstreams: Vec<String>,

    /// Do not append nameservers from resolv.conf
    #[arg(long)]
    no_resolv_conf: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        log_level: cli.log_level,
        upstream_servers: Some(cli.upstreams),
        no_resolv_conf: cli.no_resolv_conf,
    };

    let config_path = Config::config_path(cli.config.as_deref());
    let config = bootstrap::load_config(config_path.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging)?;

    info!("Starting Ferrous Relay v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::log_config(&config, config_path.as_deref());

    let dns_services = di::DnsServices::new(&config)?;
    info!(
        upstreams = ?dns_services.forwarder.servers().map(ToString::to_string).collect::<Vec<_>>(),
        "Upstream failover order"
    );

    tokio::select! {
        result = server::start_dns_server(&config.server, dns_services.handler) => result?,
        _ = tokio::signal::ctrl_c() => info!("Shutdown signal received"),
    }

    info!("Server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_upstream_flags() {
        let cli = Cli::try_parse_from([
            "ferrous-relay",
            "--upstream",
            "1.1.1.1:53",
            "-u",
            "tcp://9.9.9.9:53",
            "--no-resolv-conf",
            "--dns-port",
            "5353",
        ])
        .unwrap();

        assert_eq!(cli.upstreams, vec!["1.1.1.1:53", "tcp://9.9.9.9:53"]);
        assert!(cli.no_resolv_conf);
        assert_eq!(cli.dns_port, Some(5353));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_defaults_leave_config_untouched() {
        let cli = Cli::try_parse_from(["ferrous-relay"]).unwrap();
        assert!(cli.upstreams.is_empty());
        assert!(!cli.no_resolv_conf);
        assert!(cli.bind.is_none());
    }
}
