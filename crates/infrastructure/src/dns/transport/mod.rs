pub mod resolver;
pub mod udp;

use dnsprobe_application::ports::DnsTransport;
use dnsprobe_domain::{DomainError, ResolverConfig};
use std::sync::Arc;

pub use dnsprobe_application::ports::TransportResponse;
pub use resolver::resolve_server;

/// Builds the transport for the configured resolver, resolving its address
/// first when it is given as a hostname.
pub async fn create_transport(
    config: &ResolverConfig,
) -> Result<Arc<dyn DnsTransport>, DomainError> {
    let addr = resolve_server(&config.server, config.port, config.timeout()).await?;
    Ok(Arc::new(udp::UdpTransport::new(addr)))
}
