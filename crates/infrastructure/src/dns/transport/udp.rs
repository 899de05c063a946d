//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! One datagram out, one datagram back. No EDNS(0) and no TCP fallback, so
//! the reply buffer only needs to cover what a plain server will send.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use dnsprobe_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    fn bind_addr(&self) -> SocketAddr {
        if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }

    fn io_error(&self, action: &str, e: std::io::Error) -> DomainError {
        DomainError::Transport {
            server: self.server_addr.to_string(),
            reason: format!("{}: {}", action, e),
        }
    }

    fn timed_out(&self) -> DomainError {
        DomainError::TransportTimeout {
            server: self.server_addr.to_string(),
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let socket = UdpSocket::bind(self.bind_addr())
            .await
            .map_err(|e| self.io_error("failed to bind UDP socket", e))?;

        let bytes_sent =
            tokio::time::timeout(timeout, socket.send_to(message_bytes, self.server_addr))
                .await
                .map_err(|_| self.timed_out())?
                .map_err(|e| self.io_error("failed to send UDP query", e))?;

        if bytes_sent != message_bytes.len() {
            warn!(
                server = %self.server_addr,
                bytes_sent,
                expected = message_bytes.len(),
                "Error writing DNS packet"
            );
            return Err(DomainError::ShortWrite {
                server: self.server_addr.to_string(),
                written: bytes_sent,
                expected: message_bytes.len(),
            });
        }

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let (bytes_received, from_addr) =
            tokio::time::timeout(timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| self.timed_out())?
                .map_err(|e| self.io_error("failed to receive UDP response", e))?;

        if from_addr.ip() != self.server_addr.ip() {
            warn!(
                expected = %self.server_addr,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(TransportResponse {
            bytes: recv_buf,
            bytes_sent,
            protocol_used: "UDP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }

    fn server(&self) -> String {
        self.server_addr.to_string()
    }
}
