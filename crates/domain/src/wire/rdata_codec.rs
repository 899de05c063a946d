use super::{ByteCursor, ByteWriter, CompressionContext, NameCodec};
use crate::dns_record::RecordType;
use crate::errors::CodecError;
use std::fmt::Write as _;
use std::net::{Ipv4Addr, Ipv6Addr};
use tracing::debug;

/// Hex digits in a fully written IPv6 address.
const IPV6_HEX_DIGITS: usize = 32;

/// Type-specific RDATA handling for A, AAAA, CNAME, TXT and MX.
///
/// Decoding yields a display string only; the raw RDATA bytes stay on the
/// record as the source of truth.
pub struct RdataCodec;

impl RdataCodec {
    /// Renders the RDATA under `cursor` as text.
    ///
    /// `cursor` must be scoped to exactly the RDATA range with its origin set
    /// to the RDATA's absolute offset, so compressed MX exchange names are
    /// checked against the right positions. Returns `Ok(None)` for types the
    /// codec does not interpret.
    pub fn decode<'a>(
        record_type: RecordType,
        cursor: &mut ByteCursor<'a>,
        context: &CompressionContext<'a>,
    ) -> Result<Option<String>, CodecError> {
        let text = match record_type {
            RecordType::A => Self::decode_ipv4(cursor)?,
            RecordType::AAAA => Self::decode_ipv6(cursor)?,
            RecordType::CNAME | RecordType::TXT => Self::decode_characters(cursor)?,
            RecordType::MX => Self::decode_mx(cursor, context)?,
            RecordType::Unknown(_) => return Ok(None),
        };
        Ok(Some(text))
    }

    fn decode_ipv4(cursor: &mut ByteCursor<'_>) -> Result<String, CodecError> {
        if cursor.remaining() != 4 {
            debug!(len = cursor.remaining(), "A record data is not 4 bytes");
        }
        let mut octets = Vec::with_capacity(4);
        while !cursor.is_at_end() {
            octets.push(cursor.read_u8()?.to_string());
        }
        Ok(octets.join("."))
    }

    // Fully expanded colon-hex, no `::` shortening.
    fn decode_ipv6(cursor: &mut ByteCursor<'_>) -> Result<String, CodecError> {
        if cursor.remaining() != 16 {
            debug!(len = cursor.remaining(), "AAAA record data is not 16 bytes");
        }
        let mut text = String::with_capacity(39);
        let mut digits = 0;
        while !cursor.is_at_end() {
            let byte = cursor.read_u8()?;
            let _ = write!(text, "{:02x}", byte);
            digits += 2;
            if digits % 4 == 0 && digits < IPV6_HEX_DIGITS {
                text.push(':');
            }
        }
        Ok(text)
    }

    fn decode_characters(cursor: &mut ByteCursor<'_>) -> Result<String, CodecError> {
        let bytes = cursor.read_slice(cursor.remaining())?;
        Ok(bytes.iter().map(|&b| char::from(b)).collect())
    }

    fn decode_mx<'a>(
        cursor: &mut ByteCursor<'a>,
        context: &CompressionContext<'a>,
    ) -> Result<String, CodecError> {
        let preference = cursor.read_u16()?;
        let exchange = NameCodec::decode(cursor, context)?;
        Ok(format!("Preference #: {} // MX: {}", preference, exchange))
    }

    pub fn encode_ipv4(addr: Ipv4Addr) -> Vec<u8> {
        addr.octets().to_vec()
    }

    pub fn encode_ipv6(addr: Ipv6Addr) -> Vec<u8> {
        addr.octets().to_vec()
    }

    pub fn encode_mx(preference: u16, exchange: &str) -> Result<Vec<u8>, CodecError> {
        let mut writer = ByteWriter::with_capacity(exchange.len() + 4);
        writer.write_u16(preference);
        NameCodec::encode(&mut writer, exchange, None)?;
        Ok(writer.finish())
    }
}
