use super::cursor::WireReader;
use super::name::unpack_name;
use bytes::Bytes;
use rrwire_domain::{CodecError, FieldKind, FieldValue, Record, RecordHeader, RecordSchema};
use std::net::{Ipv4Addr, Ipv6Addr};
use tracing::{debug, trace};

/// Decodes the payload following an already parsed `header`.
///
/// A zero payload length yields a header-only record without reading. If the
/// buffer ends exactly after any field but the last, the record decoded so far
/// is returned as complete.
pub fn decode_record(
    schema: &RecordSchema,
    header: RecordHeader,
    r: &mut WireReader<'_>,
) -> Result<Record, CodecError> {
    if header.is_empty_payload() {
        return Ok(Record::new(header));
    }

    let rdata_end = r.offset() + usize::from(header.rdlength);
    let mut record = Record::new(header);
    let last = schema.len().saturating_sub(1);

    for (i, spec) in schema.fields().iter().enumerate() {
        if let Some(value) = decode_field(spec.kind, r, rdata_end)? {
            record.push(&spec.name, value);
        }

        if i < last && r.is_at_end() {
            debug!(
                rr_type = record.header.rr_type,
                decoded = i + 1,
                fields = schema.len(),
                "Buffer ended before trailing fields, returning partial record"
            );
            return Ok(record);
        }
    }

    trace!(
        owner = %record.header.name,
        rr_type = record.header.rr_type,
        end = r.offset(),
        "Record decoded"
    );
    Ok(record)
}

fn decode_field(
    kind: FieldKind,
    r: &mut WireReader<'_>,
    rdata_end: usize,
) -> Result<Option<FieldValue>, CodecError> {
    let value = match kind {
        FieldKind::Ignored => return Ok(None),
        FieldKind::DomainName | FieldKind::CompressibleDomainName => {
            FieldValue::Name(unpack_name(r)?)
        }
        FieldKind::Ipv4 => FieldValue::Ipv4(Ipv4Addr::from(r.get_array::<4>()?)),
        FieldKind::Ipv6 => FieldValue::Ipv6(Ipv6Addr::from(r.get_array::<16>()?)),
        FieldKind::Uint8 => FieldValue::Uint8(r.get_u8()?),
        FieldKind::Uint16 => FieldValue::Uint16(r.get_u16()?),
        FieldKind::Uint32 => FieldValue::Uint32(r.get_u32()?),
        FieldKind::Uint48 => FieldValue::Uint48(r.get_u48()?),
        FieldKind::Uint64 => FieldValue::Uint64(r.get_u64()?),
        FieldKind::Text => {
            let len = usize::from(r.get_u8()?);
            let bytes = r.get_bytes(len)?;
            FieldValue::Text(String::from_utf8_lossy(bytes).into_owned())
        }
        FieldKind::Opaque => {
            let len = rdata_end.saturating_sub(r.offset());
            FieldValue::Opaque(Bytes::copy_from_slice(r.get_bytes(len)?))
        }
    };
    Ok(Some(value))
}
