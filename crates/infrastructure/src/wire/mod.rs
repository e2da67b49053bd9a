pub mod catalog;
pub mod codec;
pub mod compression;
pub mod cursor;
pub mod decoder;
pub mod encoder;
pub mod header;
pub mod name;
pub mod registry;

pub use codec::RecordCodec;
pub use compression::{CompressionTable, MAX_POINTER_OFFSET};
pub use cursor::{WireReader, WireWriter, MAX_MESSAGE_SIZE};
pub use decoder::decode_record;
pub use encoder::encode_record;
pub use header::{pack_header, unpack_header};
pub use name::{pack_name, unpack_name};
pub use registry::SchemaRegistry;
