use async_trait::async_trait;
use dnsprobe_domain::DomainError;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    /// Bytes of the query actually handed to the network.
    pub bytes_sent: usize,

    pub protocol_used: &'static str,
}

/// Sends one encoded DNS message and waits for a single reply.
///
/// `timeout` bounds each of the send and the receive separately.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;

    /// Human-readable peer description used in logs, e.g. `8.8.8.8:53`.
    fn server(&self) -> String;
}
