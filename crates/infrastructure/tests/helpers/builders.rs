#![allow(dead_code)]
use rrwire_domain::{CodecConfig, FieldValue, Record, RecordHeader, RecordType};
use rrwire_infrastructure::RecordCodec;
use std::net::{Ipv4Addr, Ipv6Addr};

pub struct RecordBuilder {
    name: String,
    record_type: RecordType,
    ttl: u32,
    fields: Vec<(String, FieldValue)>,
}

impl RecordBuilder {
    pub fn new(record_type: RecordType) -> Self {
        Self {
            name: "example.com.".to_string(),
            record_type,
            ttl: 300,
            fields: Vec::new(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn field(mut self, name: &str, value: FieldValue) -> Self {
        self.fields.push((name.to_string(), value));
        self
    }

    pub fn build(self) -> Record {
        let mut record = Record::new(RecordHeader::new(self.name, self.record_type, self.ttl));
        for (name, value) in self.fields {
            record.push(&name, value);
        }
        record
    }
}

pub fn a_record(name: &str, addr: &str) -> Record {
    RecordBuilder::new(RecordType::A)
        .name(name)
        .field("A", FieldValue::Ipv4(addr.parse::<Ipv4Addr>().unwrap()))
        .build()
}

pub fn aaaa_record(name: &str, addr: &str) -> Record {
    RecordBuilder::new(RecordType::AAAA)
        .name(name)
        .field("AAAA", FieldValue::Ipv6(addr.parse::<Ipv6Addr>().unwrap()))
        .build()
}

pub fn mx_record(name: &str, preference: u16, exchange: &str) -> Record {
    RecordBuilder::new(RecordType::MX)
        .name(name)
        .field("Preference", FieldValue::Uint16(preference))
        .field("Mx", FieldValue::Name(exchange.to_string()))
        .build()
}

pub fn default_codec() -> RecordCodec {
    RecordCodec::from_config(&CodecConfig::default()).unwrap()
}

pub fn codec_with(types: &[RecordType]) -> RecordCodec {
    let config = CodecConfig {
        supported_types: types.to_vec(),
        ..CodecConfig::default()
    };
    RecordCodec::from_config(&config).unwrap()
}

/// Encodes `record` at offset 0 and decodes it back from the written bytes.
pub fn round_trip(codec: &RecordCodec, record: &mut Record) -> (Record, Vec<u8>) {
    let mut buf = vec![0u8; 4096];
    let end = codec.encode(record, &mut buf, 0, None).unwrap();
    buf.truncate(end);
    let (decoded, consumed) = codec.unpack(&buf, 0).unwrap();
    assert_eq!(consumed, end);
    (decoded, buf)
}
