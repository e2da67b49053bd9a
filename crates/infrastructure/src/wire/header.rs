use super::compression::CompressionTable;
use super::cursor::{WireReader, WireWriter};
use super::name::{pack_name, unpack_name};
use rrwire_domain::{CodecError, RecordHeader};

/// Width of the payload-length field that closes every header.
pub const RDLENGTH_WIDTH: usize = 2;

/// Writes owner name, type, class, TTL and a zero payload-length placeholder.
///
/// Returns the offset immediately after the length field; the placeholder
/// sits at `returned - RDLENGTH_WIDTH`.
pub fn pack_header(
    w: &mut WireWriter<'_>,
    header: &RecordHeader,
    table: Option<&mut CompressionTable>,
) -> Result<usize, CodecError> {
    pack_name(w, &header.name, table)?;
    w.put_u16(header.rr_type)?;
    w.put_u16(header.class)?;
    w.put_u32(header.ttl)?;
    w.put_u16(0)
}

pub fn unpack_header(r: &mut WireReader<'_>) -> Result<RecordHeader, CodecError> {
    let name = unpack_name(r)?;
    let rr_type = r.get_u16()?;
    let class = r.get_u16()?;
    let ttl = r.get_u32()?;
    let rdlength = r.get_u16()?;

    Ok(RecordHeader {
        name,
        rr_type,
        class,
        ttl,
        rdlength,
    })
}
