use crate::{CodecError, Record, RecordType};
use compact_str::CompactString;
use std::fmt;
use std::str::FromStr;

/// Wire encoding of a single record field.
///
/// The set is closed: every schema is resolved to these variants when it is
/// registered, so the codec never compares annotation strings while encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    DomainName,
    CompressibleDomainName,
    Ipv4,
    Ipv6,
    Uint8,
    Uint16,
    Uint32,
    Uint48,
    Uint64,
    Text,
    Opaque,
    Ignored,
}

impl FieldKind {
    pub const UINT48_MAX: u64 = (1 << 48) - 1;

    /// Annotation used in schema descriptions.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::DomainName => "domain-name",
            FieldKind::CompressibleDomainName => "cdomain-name",
            FieldKind::Ipv4 => "a",
            FieldKind::Ipv6 => "aaaa",
            FieldKind::Uint8 => "uint8",
            FieldKind::Uint16 => "uint16",
            FieldKind::Uint32 => "uint32",
            FieldKind::Uint48 => "uint48",
            FieldKind::Uint64 => "uint64",
            FieldKind::Text => "txt",
            FieldKind::Opaque => "opaque",
            FieldKind::Ignored => "-",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "domain-name" => Ok(FieldKind::DomainName),
            "cdomain-name" => Ok(FieldKind::CompressibleDomainName),
            "a" => Ok(FieldKind::Ipv4),
            "aaaa" => Ok(FieldKind::Ipv6),
            "uint8" => Ok(FieldKind::Uint8),
            "uint16" => Ok(FieldKind::Uint16),
            "uint32" => Ok(FieldKind::Uint32),
            "uint48" => Ok(FieldKind::Uint48),
            "uint64" => Ok(FieldKind::Uint64),
            "txt" => Ok(FieldKind::Text),
            "opaque" => Ok(FieldKind::Opaque),
            "-" => Ok(FieldKind::Ignored),
            _ => Err(format!("Unknown field kind: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: CompactString,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn new(name: &str, kind: FieldKind) -> Self {
        Self {
            name: CompactString::from(name),
            kind,
        }
    }

    /// Resolves a schema annotation into a field spec, failing on anything
    /// outside the recognized vocabulary.
    pub fn parse(name: &str, annotation: &str) -> Result<Self, CodecError> {
        let kind = annotation
            .parse::<FieldKind>()
            .map_err(|_| CodecError::UnsupportedFieldKind {
                field: name.to_string(),
                annotation: annotation.to_string(),
            })?;
        Ok(Self::new(name, kind))
    }
}

/// Ordered field layout of one record type. Field order is wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    record_type: RecordType,
    fields: Vec<FieldSpec>,
}

impl RecordSchema {
    pub fn new(record_type: RecordType, fields: Vec<FieldSpec>) -> Self {
        Self {
            record_type,
            fields,
        }
    }

    /// Builds a schema from `(name, annotation)` pairs.
    pub fn from_annotations<'a, I>(record_type: RecordType, fields: I) -> Result<Self, CodecError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let fields = fields
            .into_iter()
            .map(|(name, annotation)| FieldSpec::parse(name, annotation))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(record_type, fields))
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields that carry a value in a [`Record`] (everything but `ignored`).
    pub fn value_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.kind != FieldKind::Ignored)
    }

    /// Checks that the record's values match this schema one-to-one, in order.
    pub fn validate(&self, record: &Record) -> Result<(), CodecError> {
        let mut values = record.fields();

        for spec in self.value_fields() {
            match values.next() {
                Some((name, value)) if *name == spec.name && value.matches(spec.kind) => {
                    if spec.kind == FieldKind::Uint48 {
                        if let Some(v) = value.as_u64().filter(|v| *v > FieldKind::UINT48_MAX) {
                            return Err(CodecError::ValueOutOfRange {
                                kind: FieldKind::Uint48,
                                value: v,
                            });
                        }
                    }
                }
                _ => {
                    return Err(CodecError::FieldMismatch {
                        field: spec.name.to_string(),
                        expected: spec.kind,
                    })
                }
            }
        }

        if let Some((name, _)) = values.next() {
            return Err(CodecError::UnexpectedField(name.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_round_trip() {
        for kind in [
            FieldKind::DomainName,
            FieldKind::CompressibleDomainName,
            FieldKind::Ipv4,
            FieldKind::Ipv6,
            FieldKind::Uint8,
            FieldKind::Uint16,
            FieldKind::Uint32,
            FieldKind::Uint48,
            FieldKind::Uint64,
            FieldKind::Text,
            FieldKind::Opaque,
            FieldKind::Ignored,
        ] {
            assert_eq!(kind.as_str().parse::<FieldKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_annotation_rejected() {
        let err = FieldSpec::parse("Salt", "size-hex:SaltLength").unwrap_err();
        assert!(matches!(err, CodecError::UnsupportedFieldKind { .. }));
    }

    #[test]
    fn test_value_fields_skip_ignored() {
        let schema = RecordSchema::from_annotations(
            RecordType::MX,
            [("Skip", "-"), ("Preference", "uint16"), ("Mx", "cdomain-name")],
        )
        .unwrap();
        let names: Vec<_> = schema.value_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Preference", "Mx"]);
        assert_eq!(schema.len(), 3);
    }
}
