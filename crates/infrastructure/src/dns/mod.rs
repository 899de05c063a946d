pub mod transport;

pub use transport::{create_transport, resolve_server, udp::UdpTransport};
