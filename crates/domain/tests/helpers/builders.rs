#![allow(dead_code)]
use rrwire_domain::{FieldValue, Record, RecordHeader, RecordType};
use std::net::Ipv4Addr;
use std::str::FromStr;

pub struct RecordBuilder {
    name: String,
    record_type: RecordType,
    ttl: u32,
    fields: Vec<(String, FieldValue)>,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com.".to_string(),
            record_type: RecordType::A,
            ttl: 300,
            fields: Vec::new(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn address(self, addr: &str) -> Self {
        self.field("A", FieldValue::Ipv4(Ipv4Addr::from_str(addr).unwrap()))
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
