//! DNS wire format (RFC 1035 §4)
//!
//! Byte-level primitives ([`ByteCursor`], [`ByteWriter`]) sit at the bottom;
//! [`NameCodec`] and [`RdataCodec`] build on them, and [`MessageCodec`]
//! drives both across the header and the four record sections.

pub mod compression;
pub mod cursor;
pub mod message_codec;
pub mod name_codec;
pub mod rdata_codec;
pub mod writer;

pub use compression::CompressionContext;
pub use cursor::ByteCursor;
pub use message_codec::{DecodedMessage, Diagnostic, MessageCodec};
pub use name_codec::NameCodec;
pub use rdata_codec::RdataCodec;
pub use writer::ByteWriter;
