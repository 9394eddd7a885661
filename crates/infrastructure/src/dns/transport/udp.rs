//! UDP transport (RFC 1035 §4.2.1).
//!
//! One socket is bound for the whole resolution and reused for every query.
//! Datagrams from any address other than the queried server are dropped.

use super::DnsTransport;
use async_trait::async_trait;
use dnslookup_domain::DomainError;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::Instant;
use tracing::{debug, warn};

pub struct UdpTransport {
    socket: UdpSocket,
    max_response_size: usize,
}

impl UdpTransport {
    /// Binds an ephemeral socket of the same family as `server`.
    pub async fn bind_for(server: &SocketAddr, max_response_size: usize) -> Result<Self, DomainError> {
        let bind_addr: SocketAddr = if server.is_ipv4() {
            SocketAddr::from(([0, 0, 0, 0], 0))
        } else {
            SocketAddr::from(([0u16; 8], 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        debug!(local = ?socket.local_addr().ok(), "UDP socket bound");

        Ok(Self {
            socket,
            max_response_size,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, DomainError> {
        self.socket
            .local_addr()
            .map_err(|e| DomainError::IoError(e.to_string()))
    }

    /// An IPv6 socket reaches IPv4 servers through mapped addresses.
    fn target_for(&self, server: SocketAddr) -> Result<SocketAddr, DomainError> {
        let local = self.local_addr()?;
        match (local.ip(), server.ip()) {
            (IpAddr::V6(_), IpAddr::V4(v4)) => {
                Ok(SocketAddr::new(IpAddr::V6(v4.to_ipv6_mapped()), server.port()))
            }
            (IpAddr::V4(_), IpAddr::V6(_)) => Err(DomainError::IoError(format!(
                "IPv4 socket cannot reach {}",
                server
            ))),
            _ => Ok(server),
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn exchange(
        &self,
        query: &[u8],
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        let target = self.target_for(server)?;
        let deadline = Instant::now() + timeout;

        let bytes_sent = tokio::time::timeout_at(deadline, self.socket.send_to(query, target))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| {
                DomainError::IoError(format!("Failed to send UDP query to {}: {}", server, e))
            })?;

        debug!(server = %server, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; self.max_response_size];

        loop {
            let (bytes_received, from_addr) =
                tokio::time::timeout_at(deadline, self.socket.recv_from(&mut recv_buf))
                    .await
                    .map_err(|_| DomainError::QueryTimeout)?
                    .map_err(|e| {
                        DomainError::IoError(format!(
                            "Failed to receive UDP response from {}: {}",
                            server, e
                        ))
                    })?;

            if from_addr != target {
                warn!(
                    expected = %server,
                    received_from = %from_addr,
                    "UDP response from unexpected source"
                );
                continue;
            }

            recv_buf.truncate(bytes_received);
            debug!(server = %server, bytes_received, "UDP response received");
            return Ok(recv_buf);
        }
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
