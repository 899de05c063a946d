use crate::message::Section;
use thiserror::Error;

/// Failures raised while reading or writing DNS wire format.
///
/// Every variant is deterministic for a given input: retrying the same
/// buffer yields the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Out of data: needed {needed} byte(s) at offset {offset}")]
    OutOfData { offset: usize, needed: usize },

    #[error("Truncated message: domain name runs past the end of the buffer at offset {offset}")]
    TruncatedMessage { offset: usize },

    #[error("Malformed header: transaction id {id:#06x}, expected {expected:#06x}")]
    MalformedHeader { id: u16, expected: u16 },

    #[error("Invalid compression pointer at offset {pointer_at} targeting offset {target}")]
    InvalidCompressionPointer { pointer_at: usize, target: usize },

    #[error("Invalid label type {byte:#04x} at offset {offset}")]
    InvalidLabelType { byte: u8, offset: usize },

    #[error("Label '{label}' is {len} bytes long (maximum 63)")]
    LabelTooLong { label: String, len: usize },

    #[error("Label '{label}' contains {character:?}, which has no single-byte encoding")]
    UnencodableCharacter { label: String, character: char },

    #[error("Empty label in domain name '{name}'")]
    EmptyLabel { name: String },

    #[error("Section {section} holds {len} records, more than a header count can express")]
    SectionOverflow { section: Section, len: usize },

    #[error("Cannot encode a resource record in the {section} section: only question records are encodable")]
    UnsupportedEncode { section: Section },
}

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("DNS codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Transport error with {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Short write to {server}: sent {written} of {expected} bytes")]
    ShortWrite {
        server: String,
        written: usize,
        expected: usize,
    },
}
