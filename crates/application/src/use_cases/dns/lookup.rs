use crate::ports::DnsTransport;
use dnsprobe_domain::{
    DetailLevel, Diagnostic, DnsQuery, DomainError, Message, MessageCodec, OutputLog, Record,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Everything one lookup produced, ready for presentation.
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub query: Message,
    pub response: Message,
    pub bytes_sent: usize,
    pub bytes_received: usize,
    pub elapsed: Duration,
    pub log: OutputLog,
    pub diagnostics: Vec<Diagnostic>,
}

/// Builds a query, sends it once over the transport and decodes the reply.
///
/// No retries: a timeout or a malformed response is returned to the caller.
pub struct LookupUseCase {
    transport: Arc<dyn DnsTransport>,
    codec: MessageCodec,
    timeout: Duration,
}

impl LookupUseCase {
    pub fn new(transport: Arc<dyn DnsTransport>, timeout: Duration) -> Self {
        Self {
            transport,
            codec: MessageCodec::new(),
            timeout,
        }
    }

    pub fn with_codec(mut self, codec: MessageCodec) -> Self {
        self.codec = codec;
        self
    }

    pub async fn execute(&self, query: &DnsQuery) -> Result<LookupOutcome, DomainError> {
        let start = Instant::now();
        let server = self.transport.server();
        let mut log = OutputLog::new();

        log.push_entry(
            DetailLevel::Info,
            format!(
                "Preparing to query server {} for record type {} with hostname {}",
                server, query.record_type, query.domain
            ),
        );

        let message = query.to_message();
        let bytes = self.codec.encode(&message)?;

        let response = match self.transport.send(&bytes, self.timeout).await {
            Ok(response) => response,
            Err(e) => {
                warn!(server = %server, domain = %query.domain, error = %e, "DNS lookup failed");
                return Err(e);
            }
        };
        if response.bytes_sent != bytes.len() {
            return Err(DomainError::ShortWrite {
                server,
                written: response.bytes_sent,
                expected: bytes.len(),
            });
        }
        log.push_entry(
            DetailLevel::Info,
            format!(
                "Successfully sent {} bytes in a DNS packet",
                response.bytes_sent
            ),
        );
        log.push_entry(
            DetailLevel::Info,
            format!("Received {} byte query response", response.bytes.len()),
        );

        let decoded = self.codec.decode_with_diagnostics(&response.bytes)?;
        for diagnostic in &decoded.diagnostics {
            warn!(server = %server, %diagnostic, "DNS response anomaly");
            log.push_entry(DetailLevel::Warning, diagnostic.to_string());
        }

        let answers = decoded.message.answers();
        log.push_entry(
            DetailLevel::Info,
            format!("Query response contains {} answer records", answers.len()),
        );
        for record in answers {
            if let Record::Resource(rr) = record {
                log.push_entry(DetailLevel::Debug, rr.summary());
            }
        }

        let elapsed = start.elapsed();
        info!(
            server = %server,
            domain = %query.domain,
            record_type = %query.record_type,
            protocol = response.protocol_used,
            answers = answers.len(),
            elapsed = ?elapsed,
            "DNS lookup complete"
        );
        debug!(flags = decoded.message.flags(), "DNS response flags");

        Ok(LookupOutcome {
            query: message,
            response: decoded.message,
            bytes_sent: response.bytes_sent,
            bytes_received: response.bytes.len(),
            elapsed,
            log,
            diagnostics: decoded.diagnostics,
        })
    }
}
