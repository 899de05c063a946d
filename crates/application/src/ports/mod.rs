mod dns_transport;

pub use dns_transport::{DnsTransport, TransportResponse};

// Re-export for convenience
pub use dnsprobe_domain::DnsQuery;
