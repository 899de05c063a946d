use super::{ByteCursor, NameCodec};
use crate::dns_record::DomainName;
use crate::errors::CodecError;

/// Read-only view of a whole message used to follow compression pointers.
///
/// Pointer targets are absolute offsets from the first header byte, so the
/// context always wraps the complete message, never a section slice.
#[derive(Debug, Clone, Copy)]
pub struct CompressionContext<'a> {
    message: &'a [u8],
}

impl<'a> CompressionContext<'a> {
    pub fn new(message: &'a [u8]) -> Self {
        Self { message }
    }

    pub fn len(&self) -> usize {
        self.message.len()
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }

    /// Cursor positioned at `offset` in the message. An offset past the end
    /// yields an empty cursor, so the first read reports the truncation.
    pub fn cursor_at(&self, offset: usize) -> ByteCursor<'a> {
        let tail = self.message.get(offset..).unwrap_or(&[]);
        ByteCursor::scoped(tail, offset)
    }

    /// Decodes the complete name stored at `offset`, following any further
    /// pointers it ends with.
    pub fn resolve_name_at(&self, offset: usize) -> Result<DomainName, CodecError> {
        let mut cursor = self.cursor_at(offset);
        NameCodec::decode(&mut cursor, self)
    }
}
