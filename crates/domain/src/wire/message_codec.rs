use super::{ByteCursor, ByteWriter, CompressionContext, NameCodec, RdataCodec};
use crate::dns_record::{Question, Record, RecordType, ResourceRecord};
use crate::errors::CodecError;
use crate::message::{Message, Section};
use std::fmt;
use tracing::{debug, warn};

/// A recoverable anomaly noticed while decoding. Never aborts the decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Bytes were left over after the last declared record.
    TrailingBytes { consumed: usize, total: usize },

    /// The RDATA of a record was sliced correctly but its display text could
    /// not be produced. The raw bytes are still on the record.
    UndecodableRdata {
        section: Section,
        index: usize,
        record_type: RecordType,
        error: CodecError,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::TrailingBytes { consumed, total } => write!(
                f,
                "message was not fully consumed: {} of {} bytes read",
                consumed, total
            ),
            Diagnostic::UndecodableRdata {
                section,
                index,
                record_type,
                error,
            } => write!(
                f,
                "{} record #{} ({}) has undecodable data: {}",
                section, index, record_type, error
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    pub message: Message,
    pub diagnostics: Vec<Diagnostic>,
}

impl DecodedMessage {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Header and section codec for whole DNS messages.
///
/// The leading transaction id is written as `transaction_id` and must read
/// back as the same value; a query built with id 0 only accepts responses
/// carrying id 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageCodec {
    transaction_id: u16,
}

impl MessageCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transaction_id(transaction_id: u16) -> Self {
        Self { transaction_id }
    }

    pub fn transaction_id(&self) -> u16 {
        self.transaction_id
    }

    /// Decodes `buf`, logging any diagnostics at warn level.
    pub fn decode(&self, buf: &[u8]) -> Result<Message, CodecError> {
        let decoded = self.decode_with_diagnostics(buf)?;
        for diagnostic in &decoded.diagnostics {
            warn!(%diagnostic, "DNS message decoded with anomaly");
        }
        Ok(decoded.message)
    }

    pub fn decode_with_diagnostics(&self, buf: &[u8]) -> Result<DecodedMessage, CodecError> {
        let context = CompressionContext::new(buf);
        let mut cursor = ByteCursor::new(buf);
        let mut diagnostics = Vec::new();

        let id = cursor.read_u16()?;
        if id != self.transaction_id {
            return Err(CodecError::MalformedHeader {
                id,
                expected: self.transaction_id,
            });
        }

        let mut message = Message::with_flags(cursor.read_u16()?);
        let mut counts = [0u16; 4];
        for count in counts.iter_mut() {
            *count = cursor.read_u16()?;
        }
        debug!(
            flags = message.flags(),
            qdcount = counts[0],
            ancount = counts[1],
            nscount = counts[2],
            arcount = counts[3],
            "Decoded DNS header"
        );

        for _ in 0..counts[0] {
            let name = NameCodec::decode(&mut cursor, &context)?;
            let record_type = RecordType::from_u16(cursor.read_u16()?);
            let class = cursor.read_u16()?;
            message.push(Section::Question, Question::new(name, record_type, class));
        }

        for (section, &count) in Section::ALL.iter().zip(counts.iter()).skip(1) {
            for index in 0..usize::from(count) {
                let record =
                    decode_resource(&mut cursor, &context, *section, index, &mut diagnostics)?;
                message.push(*section, record);
            }
            debug!(section = %section, count, "Decoded DNS section");
        }

        if !cursor.is_at_end() {
            diagnostics.push(Diagnostic::TrailingBytes {
                consumed: cursor.bytes_read(),
                total: cursor.total_bytes(),
            });
        }

        Ok(DecodedMessage {
            message,
            diagnostics,
        })
    }

    /// Serializes a message holding only question records.
    ///
    /// Header counts come from the section lengths. A resource record in any
    /// section fails with [`CodecError::UnsupportedEncode`].
    pub fn encode(&self, message: &Message) -> Result<Vec<u8>, CodecError> {
        let mut writer = ByteWriter::new();
        writer
            .write_u16(self.transaction_id)
            .write_u16(message.flags());

        for section in Section::ALL {
            let len = message.count(section);
            let count = u16::try_from(len)
                .map_err(|_| CodecError::SectionOverflow { section, len })?;
            writer.write_u16(count);
        }

        for section in Section::ALL {
            for record in message.section(section) {
                let question = match record {
                    Record::Question(question) => question,
                    Record::Resource(_) => return Err(CodecError::UnsupportedEncode { section }),
                };
                NameCodec::encode_name(&mut writer, &question.name, None)?;
                writer
                    .write_u16(question.record_type.to_u16())
                    .write_u16(question.class);
            }
        }

        debug!(bytes = writer.len(), "Encoded DNS message");
        Ok(writer.finish())
    }
}

fn decode_resource<'a>(
    cursor: &mut ByteCursor<'a>,
    context: &CompressionContext<'a>,
    section: Section,
    index: usize,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<ResourceRecord, CodecError> {
    let name = NameCodec::decode(cursor, context)?;
    let record_type = RecordType::from_u16(cursor.read_u16()?);
    let class = cursor.read_u16()?;
    let ttl = cursor.read_u32()?;
    let rdlength = usize::from(cursor.read_u16()?);
    let rdata_origin = cursor.absolute_offset();
    let rdata = cursor.read_slice(rdlength)?;

    let mut record = ResourceRecord::new(name, record_type, class, ttl, rdata.to_vec());

    let mut rdata_cursor = ByteCursor::scoped(rdata, rdata_origin);
    match RdataCodec::decode(record_type, &mut rdata_cursor, context) {
        Ok(Some(text)) => record.set_data_text(text),
        Ok(None) => {}
        Err(error) => diagnostics.push(Diagnostic::UndecodableRdata {
            section,
            index,
            record_type,
            error,
        }),
    }

    Ok(record)
}
