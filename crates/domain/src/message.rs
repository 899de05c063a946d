use crate::dns_record::{Question, Record, RecordType};
use std::fmt;

/// Header flag requesting recursive resolution (RFC 1035 §4.1.1, RD bit).
pub const FLAG_RECURSION_DESIRED: u16 = 0x0100;

/// The four record sections of a DNS message, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Question,
    Answer,
    Authority,
    Additional,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Question,
        Section::Answer,
        Section::Authority,
        Section::Additional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Question => "question",
            Section::Answer => "answer",
            Section::Authority => "authority",
            Section::Additional => "additional",
        }
    }

    /// RFC 1035 header count mnemonic for the section.
    fn index(self) -> usize {
        match self {
            Section::Question => 0,
            Section::Answer => 1,
            Section::Authority => 2,
            Section::Additional => 3,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DNS message: opaque header flags plus four ordered record sections.
///
/// Header counts are never stored; the encoder derives them from the section
/// lengths so they cannot drift apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    flags: u16,
    sections: [Vec<Record>; 4],
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flags(flags: u16) -> Self {
        Self {
            flags,
            ..Self::default()
        }
    }

    /// Builds an outgoing query holding a single Internet-class question.
    pub fn query(hostname: &str, record_type: RecordType, recursion_desired: bool) -> Self {
        let flags = if recursion_desired {
            FLAG_RECURSION_DESIRED
        } else {
            0
        };
        let mut message = Self::with_flags(flags);
        message.push(Section::Question, Question::internet(hostname, record_type));
        message
    }

    pub fn flags(&self) -> u16 {
        self.flags
    }

    pub fn push(&mut self, section: Section, record: impl Into<Record>) -> &mut Self {
        self.sections[section.index()].push(record.into());
        self
    }

    pub fn section(&self, section: Section) -> &[Record] {
        &self.sections[section.index()]
    }

    pub fn count(&self, section: Section) -> usize {
        self.sections[section.index()].len()
    }

    /// Records of one section whose type matches `record_type`, in wire order.
    pub fn records_of_type(
        &self,
        section: Section,
        record_type: RecordType,
    ) -> impl Iterator<Item = &Record> + '_ {
        self.section(section)
            .iter()
            .filter(move |record| record.record_type() == record_type)
    }

    pub fn questions(&self) -> &[Record] {
        self.section(Section::Question)
    }

    pub fn answers(&self) -> &[Record] {
        self.section(Section::Answer)
    }

    pub fn answer_count(&self) -> usize {
        self.count(Section::Answer)
    }

    pub fn total_records(&self) -> usize {
        self.sections.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_records() == 0
    }
}
