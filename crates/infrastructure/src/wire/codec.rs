use super::compression::CompressionTable;
use super::cursor::{WireReader, WireWriter};
use super::decoder::decode_record;
use super::encoder::encode_record;
use super::header::unpack_header;
use super::registry::SchemaRegistry;
use rrwire_domain::{CodecConfig, CodecError, Record, RecordHeader};
use std::sync::Arc;

/// Schema-driven record encoder/decoder.
///
/// Cloning is cheap: clones share the same registry.
#[derive(Debug, Clone)]
pub struct RecordCodec {
    registry: Arc<SchemaRegistry>,
    compression: bool,
}

impl RecordCodec {
    pub fn new(registry: Arc<SchemaRegistry>, compression: bool) -> Self {
        Self {
            registry,
            compression,
        }
    }

    pub fn from_config(config: &CodecConfig) -> Result<Self, CodecError> {
        let registry = SchemaRegistry::from_config(config)?;
        Ok(Self::new(Arc::new(registry), config.compression))
    }

    pub fn registry(&self) -> &Arc<SchemaRegistry> {
        &self.registry
    }

    pub fn compression(&self) -> bool {
        self.compression
    }

    /// Encodes one record at `offset` and returns the offset after it.
    pub fn encode(
        &self,
        record: &mut Record,
        buf: &mut [u8],
        offset: usize,
        table: Option<&mut CompressionTable>,
    ) -> Result<usize, CodecError> {
        let schema = self.registry.lookup_code(record.header.rr_type)?;
        let mut w = WireWriter::new(buf, offset);
        encode_record(schema, record, &mut w, table)
    }

    /// Encodes `records` back to back with a compression table owned by this
    /// call (when compression is enabled).
    pub fn encode_all(
        &self,
        records: &mut [Record],
        buf: &mut [u8],
        offset: usize,
    ) -> Result<usize, CodecError> {
        let mut table = self.compression.then(CompressionTable::new);
        let mut w = WireWriter::new(buf, offset);

        for record in records.iter_mut() {
            let schema = self.registry.lookup_code(record.header.rr_type)?;
            encode_record(schema, record, &mut w, table.as_mut())?;
        }
        Ok(w.offset())
    }

    /// Decodes the payload for an already parsed `header` starting at `offset`.
    pub fn decode(
        &self,
        header: RecordHeader,
        buf: &[u8],
        offset: usize,
    ) -> Result<(Record, usize), CodecError> {
        let mut r = WireReader::new(buf, offset);
        let record = self.decode_with(header, &mut r)?;
        Ok((record, r.offset()))
    }

    /// Parses a header at `offset`, then its payload.
    pub fn unpack(&self, buf: &[u8], offset: usize) -> Result<(Record, usize), CodecError> {
        let mut r = WireReader::new(buf, offset);
        let header = unpack_header(&mut r)?;
        let record = self.decode_with(header, &mut r)?;
        Ok((record, r.offset()))
    }

    fn decode_with(
        &self,
        header: RecordHeader,
        r: &mut WireReader<'_>,
    ) -> Result<Record, CodecError> {
        if header.is_empty_payload() {
            return Ok(Record::new(header));
        }
        let schema = self.registry.lookup_code(header.rr_type)?;
        decode_record(schema, header, r)
    }
}
