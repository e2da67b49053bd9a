use super::compression::CompressionTable;
use super::cursor::WireWriter;
use super::header::{pack_header, RDLENGTH_WIDTH};
use super::name::pack_name;
use rrwire_domain::{CodecError, FieldKind, FieldSpec, FieldValue, Record, RecordSchema};
use tracing::trace;

const MAX_TEXT_LEN: usize = 255;

/// Encodes `record` (header and fields) at the writer's offset.
///
/// Fields are written in schema order; only `cdomain-name` fields and the
/// owner name touch `table`. On success the payload length is patched into
/// the header already written, mirrored into `record.header.rdlength`, and the
/// offset after the record is returned. On failure the bytes written so far
/// stay in the buffer and the caller must discard that region; names recorded
/// inside it are dropped from `table`.
pub fn encode_record(
    schema: &RecordSchema,
    record: &mut Record,
    w: &mut WireWriter<'_>,
    mut table: Option<&mut CompressionTable>,
) -> Result<usize, CodecError> {
    schema.validate(record)?;

    let start = w.offset();
    let result = encode_body(schema, record, w, table.as_deref_mut());
    if result.is_err() {
        if let Some(table) = table {
            table.discard_from(start);
        }
    }
    result
}

fn encode_body(
    schema: &RecordSchema,
    record: &mut Record,
    w: &mut WireWriter<'_>,
    mut table: Option<&mut CompressionTable>,
) -> Result<usize, CodecError> {
    let header_end = pack_header(w, &record.header, table.as_deref_mut())?;

    for (spec, (_, value)) in schema.value_fields().zip(record.fields()) {
        encode_field(spec, value, w, table.as_deref_mut())?;
    }

    let rdlength = (w.offset() - header_end) as u16;
    w.patch_u16(header_end - RDLENGTH_WIDTH, rdlength)?;
    record.header.rdlength = rdlength;

    trace!(
        owner = %record.header.name,
        rr_type = record.header.rr_type,
        rdlength,
        "Record encoded"
    );
    Ok(w.offset())
}

fn encode_field(
    spec: &FieldSpec,
    value: &FieldValue,
    w: &mut WireWriter<'_>,
    table: Option<&mut CompressionTable>,
) -> Result<usize, CodecError> {
    match (spec.kind, value) {
        (FieldKind::Ignored, _) => Ok(w.offset()),
        (FieldKind::DomainName, FieldValue::Name(name)) => pack_name(w, name, None),
        (FieldKind::CompressibleDomainName, FieldValue::Name(name)) => pack_name(w, name, table),
        (FieldKind::Ipv4, FieldValue::Ipv4(addr)) => w.put_bytes(&addr.octets()),
        (FieldKind::Ipv6, FieldValue::Ipv6(addr)) => w.put_bytes(&addr.octets()),
        (FieldKind::Uint8, FieldValue::Uint8(v)) => w.put_u8(*v),
        (FieldKind::Uint16, FieldValue::Uint16(v)) => w.put_u16(*v),
        (FieldKind::Uint32, FieldValue::Uint32(v)) => w.put_u32(*v),
        (FieldKind::Uint48, FieldValue::Uint48(v)) => w.put_u48(*v),
        (FieldKind::Uint64, FieldValue::Uint64(v)) => w.put_u64(*v),
        (FieldKind::Text, FieldValue::Text(text)) => {
            let bytes = text.as_bytes();
            if bytes.len() > MAX_TEXT_LEN {
                return Err(CodecError::TextTooLong(bytes.len()));
            }
            w.put_u8(bytes.len() as u8)?;
            w.put_bytes(bytes)
        }
        (FieldKind::Opaque, FieldValue::Opaque(data)) => w.put_bytes(data),
        (kind, _) => Err(CodecError::FieldMismatch {
            field: spec.name.to_string(),
            expected: kind,
        }),
    }
}
