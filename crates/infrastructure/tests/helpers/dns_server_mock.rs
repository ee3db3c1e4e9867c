#![allow(dead_code)]
use ferrous_relay_infrastructure::dns::transport::tcp::{read_frame, send_with_length_prefix};
use std::net::SocketAddr;
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    /// Echo the question and answer it with 192.0.2.1.
    Answer,
    /// Answer, but with the transaction id flipped.
    WrongId,
    /// Read queries and never reply.
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// UDP upstream on 127.0.0.1; port 0 picks a free one.
    pub async fn start(port: u16) -> Result<Self, std::io::Error> {
        Self::start_udp(port, MockBehavior::Answer).await
    }

    pub async fn start_udp(port: u16, behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], port))).await?;
        let local_addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = Self::respond(&buf[..len], behavior) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr: local_addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// TCP upstream speaking length-prefixed messages.
    pub async fn start_tcp(port: u16, behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], port))).await?;
        let local_addr = listener.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    accepted = listener.accept() => {
                        let Ok((mut stream, _)) = accepted else { continue };
                        tokio::spawn(async move {
                            while let Ok(Some(query)) = read_frame(&mut stream).await {
                                match Self::respond(&query, behavior) {
                                    Some(response) => {
                                        if send_with_length_prefix(&mut stream, &response).await.is_err() {
                                            break;
                                        }
                                    }
                                    None => continue,
                                }
                            }
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr: local_addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn respond(query: &[u8], behavior: MockBehavior) -> Option<Vec<u8>> {
        match behavior {
            MockBehavior::Silent => None,
            MockBehavior::Answer => Some(Self::build_mock_response(query)),
            MockBehavior::WrongId => {
                let mut response = Self::build_mock_response(query);
                if response.len() >= 2 {
                    response[0] ^= 0xFF;
                }
                Some(response)
            }
        }
    }

    pub fn build_mock_response(query: &[u8]) -> Vec<u8> {
        if query.len() < 12 {
            return vec![];
        }

        let mut response = Vec::with_capacity(512);

        response.extend_from_slice(&query[0..2]);
        response.extend_from_slice(&[0x81, 0x80]);
        // QDCOUNT copied, ANCOUNT 1, NSCOUNT 0, ARCOUNT 0
        response.extend_from_slice(&query[4..6]);
        response.extend_from_slice(&[0x00, 0x01, 0x00, 0x00, 0x00, 0x00]);

        if query.len() > 12 {
            response.extend_from_slice(&query[12..]);
        }

        response.extend_from_slice(&[
            0xC0, 0x0C, // pointer to the question name
            0x00, 0x01, // A
            0x00, 0x01, // IN
            0x00, 0x00, 0x00, 0x3C, // TTL 60
            0x00, 0x04, // RDLENGTH
            192, 0, 2, 1,
        ]);

        response
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
