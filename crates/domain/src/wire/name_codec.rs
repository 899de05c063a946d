use super::{ByteCursor, ByteWriter, CompressionContext};
use crate::dns_record::DomainName;
use crate::errors::CodecError;
use tracing::trace;

/// Top two bits of a length byte marking a compression pointer.
const POINTER_TAG: u8 = 0xC0;
const MAX_LABEL_LEN: usize = 63;
const MAX_POINTER_OFFSET: u16 = 0x3FFF;

/// Reads and writes domain names in RFC 1035 §4.1.4 form.
pub struct NameCodec;

impl NameCodec {
    /// Decodes one name starting at the cursor, following compression
    /// pointers through `context`.
    ///
    /// The cursor is left just past the name's terminator or its first
    /// pointer. Labels are read one byte per character (Latin-1).
    ///
    /// A pointer must target an offset strictly before the start of the label
    /// run that contains it. Every jump therefore moves backwards through the
    /// message, which bounds the walk without tracking visited offsets and
    /// rejects self-referencing or forward pointers with
    /// [`CodecError::InvalidCompressionPointer`].
    pub fn decode<'a>(
        cursor: &mut ByteCursor<'a>,
        context: &CompressionContext<'a>,
    ) -> Result<DomainName, CodecError> {
        let mut labels: Vec<String> = Vec::new();
        let mut segment_start = cursor.absolute_offset();
        let mut jumped: Option<ByteCursor<'a>> = None;

        loop {
            let reader = match jumped.as_mut() {
                Some(target_cursor) => target_cursor,
                None => &mut *cursor,
            };

            let len_at = reader.absolute_offset();
            let len = reader.read_u8().map_err(truncated)?;
            if len == 0 {
                break;
            }

            match len & POINTER_TAG {
                POINTER_TAG => {
                    let low = reader.read_u8().map_err(truncated)?;
                    let target = (usize::from(len & !POINTER_TAG) << 8) | usize::from(low);
                    if target >= segment_start {
                        return Err(CodecError::InvalidCompressionPointer {
                            pointer_at: len_at,
                            target,
                        });
                    }
                    trace!(pointer_at = len_at, target, "following compression pointer");
                    segment_start = target;
                    jumped = Some(context.cursor_at(target));
                }
                0 => {
                    let bytes = reader.read_slice(usize::from(len)).map_err(truncated)?;
                    labels.push(bytes.iter().map(|&b| char::from(b)).collect());
                }
                _ => {
                    return Err(CodecError::InvalidLabelType {
                        byte: len,
                        offset: len_at,
                    })
                }
            }
        }

        Ok(DomainName::from_labels(labels))
    }

    /// Writes a textual name such as `"mail.example.com"`.
    ///
    /// With `back_reference` the labels are followed by a pointer to that
    /// offset instead of the root terminator. No compression opportunities
    /// are searched for.
    pub fn encode(
        writer: &mut ByteWriter,
        name: &str,
        back_reference: Option<u16>,
    ) -> Result<(), CodecError> {
        Self::encode_name(writer, &DomainName::from(name), back_reference)
    }

    /// Labels are written one byte per character, the inverse of decoding,
    /// so characters above U+00FF fail with
    /// [`CodecError::UnencodableCharacter`].
    pub fn encode_name(
        writer: &mut ByteWriter,
        name: &DomainName,
        back_reference: Option<u16>,
    ) -> Result<(), CodecError> {
        let mut encoded = Vec::with_capacity(name.label_count());
        for label in name.labels() {
            let bytes = latin1_bytes(label)?;
            if bytes.is_empty() {
                return Err(CodecError::EmptyLabel {
                    name: name.to_string(),
                });
            }
            if bytes.len() > MAX_LABEL_LEN {
                return Err(CodecError::LabelTooLong {
                    label: label.clone(),
                    len: bytes.len(),
                });
            }
            encoded.push(bytes);
        }
        if let Some(offset) = back_reference {
            if offset > MAX_POINTER_OFFSET {
                return Err(CodecError::InvalidCompressionPointer {
                    pointer_at: writer.len(),
                    target: usize::from(offset),
                });
            }
        }

        for bytes in &encoded {
            writer.write_u8(bytes.len() as u8).write_bytes(bytes);
        }
        match back_reference {
            Some(offset) => writer.write_u16(u16::from(POINTER_TAG) << 8 | offset),
            None => writer.write_u8(0),
        };
        Ok(())
    }
}

fn latin1_bytes(label: &str) -> Result<Vec<u8>, CodecError> {
    label
        .chars()
        .map(|character| {
            u8::try_from(character).map_err(|_| CodecError::UnencodableCharacter {
                label: label.to_string(),
                character,
            })
        })
        .collect()
}

fn truncated(err: CodecError) -> CodecError {
    match err {
        CodecError::OutOfData { offset, .. } => CodecError::TruncatedMessage { offset },
        other => other,
    }
}
