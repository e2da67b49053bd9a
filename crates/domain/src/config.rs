pub mod codec;
pub mod errors;

pub use codec::{CodecConfig, FieldDefinition, SchemaDefinition};
pub use errors::ConfigError;
