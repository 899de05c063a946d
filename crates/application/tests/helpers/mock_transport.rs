#![allow(dead_code)]

use async_trait::async_trait;
use dnsprobe_application::ports::{DnsTransport, TransportResponse};
use dnsprobe_domain::DomainError;
use std::sync::Mutex;
use std::time::Duration;

enum Reply {
    Bytes(Vec<u8>),
    Error(DomainError),
    ShortSend(Vec<u8>, usize),
}

/// Transport double that records every query and answers from a script.
pub struct MockTransport {
    reply: Reply,
    sent: Mutex<Vec<Vec<u8>>>,
}

impl MockTransport {
    pub fn replying(bytes: Vec<u8>) -> Self {
        Self::with_reply(Reply::Bytes(bytes))
    }

    pub fn failing(error: DomainError) -> Self {
        Self::with_reply(Reply::Error(error))
    }

    /// Replies with `bytes` but reports only `sent` query bytes written.
    pub fn short_send(bytes: Vec<u8>, sent: usize) -> Self {
        Self::with_reply(Reply::ShortSend(bytes, sent))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent_queries(&self) -> Vec<Vec<u8>> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        _timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.sent.lock().unwrap().push(message_bytes.to_vec());
        let (bytes, bytes_sent) = match &self.reply {
            Reply::Bytes(bytes) => (bytes.clone(), message_bytes.len()),
            Reply::ShortSend(bytes, sent) => (bytes.clone(), *sent),
            Reply::Error(e) => return Err(e.clone()),
        };
        Ok(TransportResponse {
            bytes,
            bytes_sent,
            protocol_used: "MOCK",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }

    fn server(&self) -> String {
        "192.0.2.53:53".to_string()
    }
}

/// Response to an `example.com` query carrying the given answers, each owned
/// by a pointer to the question name.
pub fn response_bytes(id: u16, qtype: u16, answers: &[(u16, u32, &[u8])]) -> Vec<u8> {
    let mut bytes = id.to_be_bytes().to_vec();
    bytes.extend_from_slice(&[0x81, 0x80, 0x00, 0x01]);
    bytes.extend_from_slice(&(answers.len() as u16).to_be_bytes());
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    bytes.extend_from_slice(b"\x07example\x03com\x00");
    bytes.extend_from_slice(&qtype.to_be_bytes());
    bytes.extend_from_slice(&[0x00, 0x01]);
    for (rtype, ttl, rdata) in answers {
        bytes.extend_from_slice(&[0xc0, 0x0c]);
        bytes.extend_from_slice(&rtype.to_be_bytes());
        bytes.extend_from_slice(&[0x00, 0x01]);
        bytes.extend_from_slice(&ttl.to_be_bytes());
        bytes.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        bytes.extend_from_slice(rdata);
    }
    bytes
}
