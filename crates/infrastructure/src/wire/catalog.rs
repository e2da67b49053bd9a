use rrwire_domain::RecordType;

/// Field layouts for the record types the codec knows out of the box, written
/// in the same annotation vocabulary accepted from configuration.
pub fn builtin_fields(record_type: RecordType) -> Option<&'static [(&'static str, &'static str)]> {
    let fields: &'static [(&'static str, &'static str)] = match record_type {
        RecordType::A => &[("A", "a")],
        RecordType::AAAA => &[("AAAA", "aaaa")],
        RecordType::L32 => &[("Preference", "uint16"), ("Locator32", "a")],
        RecordType::MX => &[("Preference", "uint16"), ("Mx", "cdomain-name")],
        RecordType::NID => &[("Preference", "uint16"), ("NodeID", "uint64")],

        RecordType::NS => &[("Ns", "cdomain-name")],
        RecordType::CNAME => &[("Target", "cdomain-name")],
        RecordType::PTR => &[("Ptr", "cdomain-name")],
        RecordType::DNAME => &[("Target", "domain-name")],
        RecordType::SOA => &[
            ("Ns", "cdomain-name"),
            ("Mbox", "cdomain-name"),
            ("Serial", "uint32"),
            ("Refresh", "uint32"),
            ("Retry", "uint32"),
            ("Expire", "uint32"),
            ("Minttl", "uint32"),
        ],
        RecordType::SRV => &[
            ("Priority", "uint16"),
            ("Weight", "uint16"),
            ("Port", "uint16"),
            ("Target", "domain-name"),
        ],
        RecordType::KX => &[("Preference", "uint16"), ("Exchanger", "domain-name")],
        RecordType::RT => &[("Preference", "uint16"), ("Host", "domain-name")],
        RecordType::LP => &[("Preference", "uint16"), ("Fqdn", "domain-name")],
        RecordType::L64 => &[("Preference", "uint16"), ("Locator64", "uint64")],
        RecordType::EUI48 => &[("Address", "uint48")],
        RecordType::EUI64 => &[("Address", "uint64")],
        RecordType::HINFO => &[("Cpu", "txt"), ("Os", "txt")],
        RecordType::NULL => &[("Data", "opaque")],

        _ => return None,
    };
    Some(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rrwire_domain::RecordSchema;

    #[test]
    fn test_builtin_layouts_parse() {
        for record_type in [
            RecordType::A,
            RecordType::AAAA,
            RecordType::L32,
            RecordType::MX,
            RecordType::NID,
            RecordType::SOA,
            RecordType::SRV,
            RecordType::EUI48,
            RecordType::HINFO,
            RecordType::NULL,
        ] {
            let fields = builtin_fields(record_type).unwrap();
            let schema =
                RecordSchema::from_annotations(record_type, fields.iter().copied()).unwrap();
            assert_eq!(schema.len(), fields.len());
        }
    }

    #[test]
    fn test_unlisted_types_have_no_layout() {
        assert!(builtin_fields(RecordType::RRSIG).is_none());
        assert!(builtin_fields(RecordType::OPT).is_none());
    }
}
