use super::RecordType;
use crate::FieldKind;
use bytes::Bytes;
use compact_str::CompactString;
use smallvec::SmallVec;
use std::net::{Ipv4Addr, Ipv6Addr};

pub const CLASS_IN: u16 = 1;

/// Fixed part of a resource record preceding its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordHeader {
    pub name: String,
    pub rr_type: u16,
    pub class: u16,
    pub ttl: u32,
    /// Payload length. Only authoritative after encoding or when parsed.
    pub rdlength: u16,
}

impl RecordHeader {
    pub fn new(name: impl Into<String>, record_type: RecordType, ttl: u32) -> Self {
        Self {
            name: name.into(),
            rr_type: record_type.to_u16(),
            class: CLASS_IN,
            ttl,
            rdlength: 0,
        }
    }

    /// Zero-length payloads signal deletion or presence in dynamic updates.
    pub fn is_empty_payload(&self) -> bool {
        self.rdlength == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Name(String),
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint48(u64),
    Uint64(u64),
    Text(String),
    Opaque(Bytes),
}

impl FieldValue {
    pub fn matches(&self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (FieldValue::Name(_), FieldKind::DomainName)
                | (FieldValue::Name(_), FieldKind::CompressibleDomainName)
                | (FieldValue::Ipv4(_), FieldKind::Ipv4)
                | (FieldValue::Ipv6(_), FieldKind::Ipv6)
                | (FieldValue::Uint8(_), FieldKind::Uint8)
                | (FieldValue::Uint16(_), FieldKind::Uint16)
                | (FieldValue::Uint32(_), FieldKind::Uint32)
                | (FieldValue::Uint48(_), FieldKind::Uint48)
                | (FieldValue::Uint64(_), FieldKind::Uint64)
                | (FieldValue::Text(_), FieldKind::Text)
                | (FieldValue::Opaque(_), FieldKind::Opaque)
        )
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            FieldValue::Uint8(v) => Some(u64::from(*v)),
            FieldValue::Uint16(v) => Some(u64::from(*v)),
            FieldValue::Uint32(v) => Some(u64::from(*v)),
            FieldValue::Uint48(v) | FieldValue::Uint64(v) => Some(*v),
            _ => None,
        }
    }
}

/// A resource record: header plus field values in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub header: RecordHeader,
    fields: SmallVec<[(CompactString, FieldValue); 4]>,
}

impl Record {
    pub fn new(header: RecordHeader) -> Self {
        Self {
            header,
            fields: SmallVec::new(),
        }
    }

    pub fn with_field(mut self, name: &str, value: FieldValue) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: &str, value: FieldValue) {
        self.fields.push((CompactString::from(name), value));
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, v)| v)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&CompactString, &FieldValue)> {
        self.fields.iter().map(|(n, v)| (n, v))
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }
}
