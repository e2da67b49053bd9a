use crate::{FieldKind, RecordType};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Buffer overflow at offset {offset}: {needed} bytes exceed limit {limit}")]
    Overflow {
        offset: usize,
        needed: usize,
        limit: usize,
    },

    #[error("Truncated input at offset {offset}: need {needed} bytes, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("No schema registered for record type {0}")]
    UnregisteredType(u16),

    #[error("Unsupported field kind '{annotation}' for field {field}")]
    UnsupportedFieldKind { field: String, annotation: String },

    #[error("Unknown record type: {0}")]
    UnknownRecordType(String),

    #[error("Record type {0} is already registered")]
    AlreadyRegistered(RecordType),

    #[error("No schema definition available for record type {0}")]
    NoSchemaDefinition(RecordType),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Bad compression pointer at offset {0}")]
    BadPointer(usize),

    #[error("Value {value} out of range for {kind} field")]
    ValueOutOfRange { kind: FieldKind, value: u64 },

    #[error("Field {field} does not match schema (expected {expected})")]
    FieldMismatch { field: String, expected: FieldKind },

    #[error("Field {0} is not part of the record schema")]
    UnexpectedField(String),

    #[error("Text field too long: {0} bytes (max 255)")]
    TextTooLong(usize),

    #[error("Invalid codec configuration: {0}")]
    InvalidConfig(String),
}

impl CodecError {
    /// Buffer offset the failing operation had reached, when the error has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            CodecError::Overflow { offset, .. } | CodecError::Truncated { offset, .. } => {
                Some(*offset)
            }
            CodecError::BadPointer(offset) => Some(*offset),
            _ => None,
        }
    }
}
