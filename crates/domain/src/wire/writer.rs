const INITIAL_CAPACITY: usize = 512;

/// Append-only byte sink for building wire messages. Grows as needed.
#[derive(Debug, Clone)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn write_u8(&mut self, byte: u8) -> &mut Self {
        self.buf.push(byte);
        self
    }

    pub fn write_u16(&mut self, value: u16) -> &mut Self {
        self.write_u8((value >> 8) as u8).write_u8((value & 0xff) as u8)
    }

    pub fn write_u32(&mut self, value: u32) -> &mut Self {
        self.write_u16((value >> 16) as u16)
            .write_u16((value & 0xffff) as u16)
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for ByteWriter {
    fn default() -> Self {
        Self::new()
    }
}
