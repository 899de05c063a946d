use crate::errors::CodecError;

/// Forward-only reader over an immutable byte buffer.
///
/// A cursor may be scoped to a sub-slice of a larger message; `origin` then
/// records where that slice starts so [`ByteCursor::absolute_offset`] still
/// reports positions relative to the start of the whole message.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
    origin: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self::scoped(buf, 0)
    }

    pub fn scoped(buf: &'a [u8], origin: usize) -> Self {
        Self {
            buf,
            pos: 0,
            origin,
        }
    }

    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        self.ensure(1)?;
        let byte = self.buf[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    pub fn read_u16(&mut self) -> Result<u16, CodecError> {
        self.ensure(2)?;
        let hi = u16::from(self.read_u8()?);
        let lo = u16::from(self.read_u8()?);
        Ok((hi << 8) | lo)
    }

    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        self.ensure(4)?;
        let hi = u32::from(self.read_u16()?);
        let lo = u32::from(self.read_u16()?);
        Ok((hi << 16) | lo)
    }

    /// Borrows the next `len` bytes. The offset is left untouched on failure.
    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8], CodecError> {
        self.ensure(len)?;
        let slice = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    pub fn bytes_read(&self) -> usize {
        self.pos
    }

    pub fn total_bytes(&self) -> usize {
        self.buf.len()
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn is_at_end(&self) -> bool {
        self.bytes_read() >= self.total_bytes()
    }

    pub fn absolute_offset(&self) -> usize {
        self.origin + self.pos
    }

    fn ensure(&self, needed: usize) -> Result<(), CodecError> {
        if self.remaining() < needed {
            return Err(CodecError::OutOfData {
                offset: self.absolute_offset(),
                needed,
            });
        }
        Ok(())
    }
}
