pub mod domain_name;
pub mod record;
pub mod record_type;

pub use domain_name::DomainName;
pub use record::{Question, Record, ResourceRecord, CLASS_IN};
pub use record_type::RecordType;
