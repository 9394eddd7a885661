pub mod resolver;
pub mod udp;

use async_trait::async_trait;
use dnslookup_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

pub use resolver::resolve_server;
pub use udp::UdpTransport;

/// Sends one query and waits for the matching datagram.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Returns the raw response, `QueryTimeout` when nothing usable arrives
    /// within `timeout`, or `IoError` for socket failures.
    async fn exchange(
        &self,
        query: &[u8],
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError>;

    fn protocol_name(&self) -> &'static str;

    /// Turns a server argument or learned nameserver address into a socket
    /// address.
    async fn resolve_server(
        &self,
        host: &str,
        port: u16,
        timeout: Duration,
    ) -> Result<SocketAddr, DomainError> {
        resolve_server(host, port, timeout).await
    }
}
