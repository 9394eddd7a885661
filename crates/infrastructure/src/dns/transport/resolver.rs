use dnslookup_domain::DomainError;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

/// Resolves a server given as a literal address or a host name.
///
/// Host names go through the system resolver; IPv4 results are preferred
/// since glue and learned nameserver addresses are always IPv4.
pub async fn resolve_server(
    host: &str,
    port: u16,
    timeout: Duration,
) -> Result<SocketAddr, DomainError> {
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, port));
    }

    let target = format!("{}:{}", host, port);

    let addrs: Vec<SocketAddr> = tokio::time::timeout(timeout, tokio::net::lookup_host(&target))
        .await
        .map_err(|_| DomainError::ServerAddress(format!("lookup of {} timed out", target)))?
        .map_err(|e| DomainError::ServerAddress(format!("{}: {}", target, e)))?
        .collect();

    let addr = addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| DomainError::ServerAddress(format!("no addresses found for {}", target)))?;

    debug!(host = %host, resolved = %addr, "Resolved server address");
    Ok(addr)
}
