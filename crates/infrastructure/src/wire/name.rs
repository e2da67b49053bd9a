//! Domain-name wire codec (RFC 1035 §3.1, §4.1.4).
//!
//! Names are absolute presentation strings (`host.example.com.`). `\X` and
//! `\DDD` escapes are accepted when packing and produced when unpacking, so
//! any label byte survives a round trip.

use super::compression::CompressionTable;
use super::cursor::{WireReader, WireWriter};
use compact_str::CompactString;
use rrwire_domain::CodecError;
use smallvec::SmallVec;
use tracing::debug;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_WIRE_LEN: usize = 255;
const POINTER_MASK: u8 = 0xC0;

type Label = SmallVec<[u8; 32]>;

/// Splits a presentation name into raw label bytes.
pub fn parse_labels(name: &str) -> Result<SmallVec<[Label; 8]>, CodecError> {
    let invalid = |reason: &str| CodecError::InvalidDomainName(format!("{}: {}", name, reason));

    let mut labels: SmallVec<[Label; 8]> = SmallVec::new();
    if name == "." {
        return Ok(labels);
    }

    let bytes = name.as_bytes();
    let mut current = Label::new();
    let mut wire_len = 1;
    let mut terminated = false;
    let mut i = 0;

    while i < bytes.len() {
        terminated = false;
        match bytes[i] {
            b'\\' => {
                let digits = bytes.get(i + 1..i + 4).filter(|d| d.iter().all(u8::is_ascii_digit));
                if let Some(digits) = digits {
                    let value = digits
                        .iter()
                        .fold(0u32, |acc, d| acc * 10 + u32::from(d - b'0'));
                    if value > 255 {
                        return Err(invalid("escape out of range"));
                    }
                    current.push(value as u8);
                    i += 4;
                } else {
                    let escaped = *bytes.get(i + 1).ok_or_else(|| invalid("dangling escape"))?;
                    current.push(escaped);
                    i += 2;
                }
                continue;
            }
            b'.' => {
                if current.is_empty() {
                    return Err(invalid("empty label"));
                }
                if current.len() > MAX_LABEL_LEN {
                    return Err(invalid("label exceeds 63 bytes"));
                }
                wire_len += current.len() + 1;
                labels.push(std::mem::take(&mut current));
                terminated = true;
            }
            b => current.push(b),
        }
        i += 1;
    }

    if !terminated {
        return Err(invalid("name is not fully qualified"));
    }
    if wire_len > MAX_NAME_WIRE_LEN {
        return Err(invalid("name exceeds 255 bytes"));
    }
    Ok(labels)
}

/// Appends one label in presentation form, escaping as needed.
fn push_escaped(out: &mut String, label: &[u8]) {
    for &b in label {
        match b {
            b'.' | b'\\' | b'"' | b'(' | b')' | b';' | b' ' | b'@' | b'$' => {
                out.push('\\');
                out.push(b as char);
            }
            0x21..=0x7E => out.push(b as char),
            _ => {
                out.push('\\');
                out.push_str(&format!("{:03}", b));
            }
        }
    }
    out.push('.');
}

/// Case-insensitive key for the name made of `labels`.
fn canonical_key(labels: &[Label]) -> CompactString {
    let mut out = String::new();
    for label in labels {
        push_escaped(&mut out, label);
    }
    out.make_ascii_lowercase();
    CompactString::from(out)
}

/// Writes `name` at the writer's offset.
///
/// With a table, every suffix of the name is looked up: the first hit that
/// points before the suffix's own position is emitted as a 2-byte pointer and
/// ends the name. Suffixes that miss are recorded at their start offset, but
/// only once the name has been written out completely, so a failed write
/// leaves the table as it was. Without a table the full label sequence is
/// always written and nothing is recorded.
pub fn pack_name(
    w: &mut WireWriter<'_>,
    name: &str,
    mut table: Option<&mut CompressionTable>,
) -> Result<usize, CodecError> {
    let labels = parse_labels(name)?;
    let mut pending: SmallVec<[(CompactString, usize); 8]> = SmallVec::new();

    for i in 0..labels.len() {
        let start = w.offset();

        if let Some(known) = table.as_deref() {
            let key = canonical_key(&labels[i..]);
            match known.lookup(&key) {
                Some(pointer) if usize::from(pointer) < start => {
                    let end = w.put_u16(0xC000 | pointer)?;
                    commit(table.as_deref_mut(), name, pending);
                    return Ok(end);
                }
                Some(_) => {}
                None => pending.push((key, start)),
            }
        }

        let label = &labels[i];
        w.put_u8(label.len() as u8)?;
        w.put_bytes(label)?;
    }

    let end = w.put_u8(0)?;
    commit(table.as_deref_mut(), name, pending);
    Ok(end)
}

/// Records the suffixes of a fully written name.
fn commit(
    table: Option<&mut CompressionTable>,
    name: &str,
    pending: SmallVec<[(CompactString, usize); 8]>,
) {
    let Some(table) = table else { return };
    for (key, offset) in pending {
        if !table.record(key, offset) {
            debug!(name = %name, offset, "Name offset not addressable by a compression pointer");
        }
    }
}

/// Reads a possibly compressed name. Pointers must point strictly backwards,
/// which also rules out loops. The reader ends after the first pointer or the
/// terminating zero label, whichever comes first.
pub fn unpack_name(r: &mut WireReader<'_>) -> Result<String, CodecError> {
    let buf = r.buffer();
    let mut pos = r.offset();
    let mut resume = None;
    let mut wire_len = 1;
    let mut out = String::new();

    loop {
        let len = *buf.get(pos).ok_or(CodecError::Truncated {
            offset: pos,
            needed: 1,
            available: 0,
        })?;

        match len & POINTER_MASK {
            0x00 if len == 0 => {
                pos += 1;
                break;
            }
            0x00 => {
                let len = len as usize;
                let label = buf.get(pos + 1..pos + 1 + len).ok_or(CodecError::Truncated {
                    offset: pos + 1,
                    needed: len,
                    available: buf.len().saturating_sub(pos + 1),
                })?;
                wire_len += len + 1;
                if wire_len > MAX_NAME_WIRE_LEN {
                    return Err(CodecError::InvalidDomainName(format!(
                        "name at offset {} exceeds 255 bytes",
                        r.offset()
                    )));
                }
                push_escaped(&mut out, label);
                pos += 1 + len;
            }
            POINTER_MASK => {
                let low = *buf.get(pos + 1).ok_or(CodecError::Truncated {
                    offset: pos + 1,
                    needed: 1,
                    available: 0,
                })?;
                let target = (usize::from(len & 0x3F) << 8) | usize::from(low);
                if target >= pos {
                    return Err(CodecError::BadPointer(pos));
                }
                resume.get_or_insert(pos + 2);
                pos = target;
            }
            _ => {
                return Err(CodecError::InvalidDomainName(format!(
                    "reserved label type 0x{:02x} at offset {}",
                    len, pos
                )))
            }
        }
    }

    if out.is_empty() {
        out.push('.');
    }
    r.seek(resume.unwrap_or(pos));
    Ok(out)
}
