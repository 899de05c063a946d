use super::{DomainName, RecordType};

/// The Internet class code.
pub const CLASS_IN: u16 = 1;

/// A question-section entry: a query template without TTL or data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: DomainName,

    pub record_type: RecordType,

    pub class: u16,
}

impl Question {
    pub fn new(name: impl Into<DomainName>, record_type: RecordType, class: u16) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
        }
    }

    /// Question in the Internet class, the only class a query is built with.
    pub fn internet(name: impl Into<DomainName>, record_type: RecordType) -> Self {
        Self::new(name, record_type, CLASS_IN)
    }
}

/// An answer, authority or additional record.
///
/// `rdata` is the authoritative payload. `data_text` is a display projection
/// cached by the decoder and may be absent for types the codec does not
/// interpret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: DomainName,

    pub record_type: RecordType,

    pub class: u16,

    pub ttl: u32,

    pub rdata: Vec<u8>,

    data_text: Option<String>,
}

impl ResourceRecord {
    pub fn new(
        name: impl Into<DomainName>,
        record_type: RecordType,
        class: u16,
        ttl: u32,
        rdata: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
            ttl,
            rdata,
            data_text: None,
        }
    }

    pub fn rdlength(&self) -> usize {
        self.rdata.len()
    }

    pub fn data_text(&self) -> Option<&str> {
        self.data_text.as_deref()
    }

    pub fn set_data_text(&mut self, text: impl Into<String>) {
        self.data_text = Some(text.into());
    }

    pub fn with_data_text(mut self, text: impl Into<String>) -> Self {
        self.set_data_text(text);
        self
    }

    /// One-line human summary, e.g.
    /// `A record with name example.com and TTL 300 and data section of 192.0.2.1`.
    pub fn summary(&self) -> String {
        format!(
            "{} record with name {} and TTL {} and data section of {}",
            self.record_type,
            self.name,
            self.ttl,
            self.data_text().unwrap_or("")
        )
    }
}

/// A record in one of the four message sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Question(Question),
    Resource(ResourceRecord),
}

impl Record {
    pub fn name(&self) -> &DomainName {
        match self {
            Record::Question(q) => &q.name,
            Record::Resource(rr) => &rr.name,
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            Record::Question(q) => q.record_type,
            Record::Resource(rr) => rr.record_type,
        }
    }

    pub fn class(&self) -> u16 {
        match self {
            Record::Question(q) => q.class,
            Record::Resource(rr) => rr.class,
        }
    }

    pub fn ttl(&self) -> Option<u32> {
        self.as_resource().map(|rr| rr.ttl)
    }

    pub fn rdata(&self) -> Option<&[u8]> {
        self.as_resource().map(|rr| rr.rdata.as_slice())
    }

    pub fn is_question(&self) -> bool {
        matches!(self, Record::Question(_))
    }

    pub fn as_question(&self) -> Option<&Question> {
        match self {
            Record::Question(q) => Some(q),
            Record::Resource(_) => None,
        }
    }

    pub fn as_resource(&self) -> Option<&ResourceRecord> {
        match self {
            Record::Resource(rr) => Some(rr),
            Record::Question(_) => None,
        }
    }
}

impl From<Question> for Record {
    fn from(question: Question) -> Self {
        Record::Question(question)
    }
}

impl From<ResourceRecord> for Record {
    fn from(record: ResourceRecord) -> Self {
        Record::Resource(record)
    }
}
