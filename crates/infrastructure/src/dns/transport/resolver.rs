use dnsprobe_domain::DomainError;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

/// Turns a configured server into a socket address.
///
/// IP literals are used as-is; anything else goes through the system
/// resolver and the first address returned wins.
pub async fn resolve_server(
    host: &str,
    port: u16,
    timeout: Duration,
) -> Result<SocketAddr, DomainError> {
    if let Ok(ip) = host.trim_matches(|c| c == '[' || c == ']').parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, port));
    }

    let target = format!("{}:{}", host, port);

    let mut addrs = tokio::time::timeout(timeout, tokio::net::lookup_host(&target))
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: target.clone(),
        })?
        .map_err(|e| {
            DomainError::InvalidDomainName(format!("DNS resolution failed for {}: {}", target, e))
        })?;

    let addr = addrs.next().ok_or_else(|| {
        DomainError::InvalidDomainName(format!("No addresses found for {}", target))
    })?;

    debug!(server = %target, resolved = %addr, "Resolved DNS server address");
    Ok(addr)
}
