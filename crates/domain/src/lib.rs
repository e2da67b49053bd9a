//! rrwire Domain Layer
//!
//! Record types, field schemas and error types shared by the wire codec.
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod schema;

pub use config::{CodecConfig, ConfigError, FieldDefinition, SchemaDefinition};
pub use dns_record::{FieldValue, Record, RecordHeader, RecordType, CLASS_IN};
pub use errors::CodecError;
pub use schema::{FieldKind, FieldSpec, RecordSchema};
