use ferrous_relay_domain::config::{ListenProtocol, ServerConfig};
use ferrous_relay_infrastructure::dns::server::DnsServerHandler;
use ferrous_relay_infrastructure::dns::transport::tcp::{read_frame, send_with_length_prefix};
use ferrous_relay_infrastructure::dns::transport::udp::MAX_UDP_RESPONSE_SIZE;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// Runs the configured listeners until they all stop.
///
/// Dropping the returned future aborts every listener task.
pub async fn start_dns_server(
    config: &ServerConfig,
    handler: DnsServerHandler,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = config.listen_addr().parse()?;
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let handler = Arc::new(handler);
    let mut join_set: JoinSet<()> = JoinSet::new();

    if config.listens_on(ListenProtocol::Udp) {
        let udp_socket = Arc::new(create_udp_socket(domain, socket_addr)?);
        let handler_udp = handler.clone();
        join_set.spawn(async move {
            run_udp_listener(udp_socket, handler_udp).await;
        });
    }

    if config.listens_on(ListenProtocol::Tcp) {
        let tcp_listener = create_tcp_listener(domain, socket_addr)?;
        let handler_tcp = handler.clone();
        let idle_timeout = Duration::from_secs(config.tcp_idle_timeout_secs);
        join_set.spawn(async move {
            run_tcp_listener(tcp_listener, handler_tcp, idle_timeout).await;
        });
    }

    info!(
        bind_address = %socket_addr,
        protocols = ?config.protocols,
        "DNS relay ready"
    );

    while join_set.join_next().await.is_some() {}
    Ok(())
}

async fn run_udp_listener(socket: Arc<UdpSocket>, handler: Arc<DnsServerHandler>) {
    let mut recv_buf = [0u8; MAX_UDP_RESPONSE_SIZE];

    loop {
        let (len, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                warn!(error = %e, "UDP recv error");
                continue;
            }
        };

        let handler = handler.clone();
        let socket = socket.clone();
        let query: Arc<[u8]> = Arc::from(&recv_buf[..len]);
        tokio::spawn(async move {
            if let Some(response) = handler.handle_raw(&query, from, ListenProtocol::Udp).await {
                if let Err(e) = socket.send_to(&response, from).await {
                    warn!(client = %from, error = %e, "Failed to send UDP response");
                }
            }
        });
    }
}

async fn run_tcp_listener(
    listener: TcpListener,
    handler: Arc<DnsServerHandler>,
    idle_timeout: Duration,
) {
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!(error = %e, "TCP accept error");
                continue;
            }
        };

        let handler = handler.clone();
        tokio::spawn(async move {
            serve_tcp_connection(stream, peer, handler, idle_timeout).await;
        });
    }
}

/// Serves length-prefixed queries on one connection until the client closes
/// it, stays idle too long, or a query cannot be forwarded.
async fn serve_tcp_connection(
    mut stream: TcpStream,
    peer: SocketAddr,
    handler: Arc<DnsServerHandler>,
    idle_timeout: Duration,
) {
    if let Err(e) = stream.set_nodelay(true) {
        debug!(client = %peer, error = %e, "Failed to set TCP_NODELAY");
    }

    loop {
        let query = match tokio::time::timeout(idle_timeout, read_frame(&mut stream)).await {
            Ok(Ok(Some(query))) => query,
            Ok(Ok(None)) => {
                debug!(client = %peer, "TCP client closed connection");
                break;
            }
            Ok(Err(e)) => {
                debug!(client = %peer, error = %e, "TCP read failed");
                break;
            }
            Err(_) => {
                debug!(client = %peer, "TCP connection idle, closing");
                break;
            }
        };

        let Some(response) = handler.handle_raw(&query, peer, ListenProtocol::Tcp).await else {
            break;
        };

        if let Err(e) = send_with_length_prefix(&mut stream, &response).await {
            warn!(client = %peer, error = %e, "Failed to send TCP response");
            break;
        }
    }
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

fn create_tcp_listener(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}
