pub mod record;
pub mod record_type;

pub use record::{FieldValue, Record, RecordHeader, CLASS_IN};
pub use record_type::RecordType;
