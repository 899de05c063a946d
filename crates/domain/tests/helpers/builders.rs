#![allow(dead_code)]
use dnsprobe_domain::{ByteWriter, NameCodec, RdataCodec, RecordType};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Offset of the first question name, right after the 12-byte header.
pub const QUESTION_NAME_OFFSET: u16 = 12;

/// Builds raw response bytes the way a server lays them out: one question,
/// then answers whose owner names point back at the question name.
pub struct ResponseBuilder {
    id: u16,
    flags: u16,
    question: Vec<u8>,
    answers: Vec<Vec<u8>>,
    authority: Vec<Vec<u8>>,
    additional: Vec<Vec<u8>>,
    trailing: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new(hostname: &str, record_type: RecordType) -> Self {
        let mut question = encode_labels(hostname);
        question.extend_from_slice(&record_type.to_u16().to_be_bytes());
        question.extend_from_slice(&1u16.to_be_bytes());

        Self {
            id: 0,
            flags: 0x8180,
            question,
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
            trailing: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn answer(mut self, record_type: RecordType, ttl: u32, rdata: &[u8]) -> Self {
        self.answers.push(pointer_record(record_type, ttl, rdata));
        self
    }

    pub fn a(self, addr: Ipv4Addr, ttl: u32) -> Self {
        self.answer(RecordType::A, ttl, &RdataCodec::encode_ipv4(addr))
    }

    pub fn aaaa(self, addr: Ipv6Addr, ttl: u32) -> Self {
        self.answer(RecordType::AAAA, ttl, &RdataCodec::encode_ipv6(addr))
    }

    /// MX with an uncompressed exchange name.
    pub fn mx(self, preference: u16, exchange: &str, ttl: u32) -> Self {
        let rdata = RdataCodec::encode_mx(preference, exchange).unwrap();
        self.answer(RecordType::MX, ttl, &rdata)
    }

    /// MX whose exchange is `label` followed by a pointer to the question name.
    pub fn mx_under_question(self, preference: u16, label: &str, ttl: u32) -> Self {
        let mut writer = ByteWriter::new();
        writer.write_u16(preference);
        NameCodec::encode(&mut writer, label, Some(QUESTION_NAME_OFFSET)).unwrap();
        self.answer(RecordType::MX, ttl, &writer.finish())
    }

    pub fn authority(mut self, record_type: RecordType, ttl: u32, rdata: &[u8]) -> Self {
        self.authority.push(pointer_record(record_type, ttl, rdata));
        self
    }

    pub fn additional(mut self, record_type: RecordType, ttl: u32, rdata: &[u8]) -> Self {
        self.additional.push(pointer_record(record_type, ttl, rdata));
        self
    }

    pub fn trailing(mut self, bytes: &[u8]) -> Self {
        self.trailing.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(512);
        bytes.extend_from_slice(&self.id.to_be_bytes());
        bytes.extend_from_slice(&self.flags.to_be_bytes());
        for count in [
            1,
            self.answers.len(),
            self.authority.len(),
            self.additional.len(),
        ] {
            bytes.extend_from_slice(&(count as u16).to_be_bytes());
        }
        bytes.extend_from_slice(&self.question);
        for record in self
            .answers
            .iter()
            .chain(&self.authority)
            .chain(&self.additional)
        {
            bytes.extend_from_slice(record);
        }
        bytes.extend_from_slice(&self.trailing);
        bytes
    }
}

pub fn encode_labels(hostname: &str) -> Vec<u8> {
    let mut bytes = Vec::new();
    for label in hostname.split('.').filter(|l| !l.is_empty()) {
        bytes.push(label.len() as u8);
        bytes.extend_from_slice(label.as_bytes());
    }
    bytes.push(0);
    bytes
}

fn pointer_record(record_type: RecordType, ttl: u32, rdata: &[u8]) -> Vec<u8> {
    let mut record = (0xC000 | QUESTION_NAME_OFFSET).to_be_bytes().to_vec();
    record.extend_from_slice(&record_type.to_u16().to_be_bytes());
    record.extend_from_slice(&1u16.to_be_bytes());
    record.extend_from_slice(&ttl.to_be_bytes());
    record.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    record.extend_from_slice(rdata);
    record
}
