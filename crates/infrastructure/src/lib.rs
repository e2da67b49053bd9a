//! rrwire Infrastructure Layer
//!
//! Binary codec for resource-record payloads: cursor, name compression,
//! schema registry, record encoder and decoder.
pub mod wire;

pub use wire::{CompressionTable, RecordCodec, SchemaRegistry, WireReader, WireWriter};
