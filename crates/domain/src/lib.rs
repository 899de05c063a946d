//! dnsprobe domain layer: DNS wire codec, message model and configuration
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod message;
pub mod output_log;
pub mod wire;

pub use config::{CliOverrides, Config, ConfigError, LogFormat, LoggingConfig, ResolverConfig};
pub use dns_query::DnsQuery;
pub use dns_record::{DomainName, Question, Record, RecordType, ResourceRecord, CLASS_IN};
pub use errors::{CodecError, DomainError};
pub use message::{Message, Section, FLAG_RECURSION_DESIRED};
pub use output_log::{DetailLevel, OutputLog, OutputRecord};
pub use wire::{
    ByteCursor, ByteWriter, CompressionContext, DecodedMessage, Diagnostic, MessageCodec,
    NameCodec, RdataCodec,
};
