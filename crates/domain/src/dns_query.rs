use super::{Message, RecordType};
use std::sync::Arc;

/// What the caller wants to look up: a hostname, a record type and whether
/// the server should recurse on its behalf.
#[derive(Debug, Clone)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub recursion_desired: bool,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            recursion_desired: true,
        }
    }

    pub fn with_recursion(mut self, recursion_desired: bool) -> Self {
        self.recursion_desired = recursion_desired;
        self
    }

    pub fn to_message(&self) -> Message {
        Message::query(&self.domain, self.record_type, self.recursion_desired)
    }
}
