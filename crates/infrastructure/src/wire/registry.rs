use super::catalog::builtin_fields;
use rrwire_domain::{CodecConfig, CodecError, FieldSpec, RecordSchema, RecordType};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Record schemas by type. Built once, then shared read-only (typically behind
/// an `Arc`) by any number of encode/decode calls.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: FxHashMap<RecordType, RecordSchema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the registry from configuration: schemas declared there first,
    /// then every supported type not yet covered, from the built-in catalog.
    pub fn from_config(config: &CodecConfig) -> Result<Self, CodecError> {
        config
            .validate()
            .map_err(|e| CodecError::InvalidConfig(e.to_string()))?;

        let mut registry = Self::new();

        for definition in &config.schemas {
            let record_type: RecordType = definition
                .record_type
                .parse()
                .map_err(|_| CodecError::UnknownRecordType(definition.record_type.clone()))?;
            let fields = definition
                .fields
                .iter()
                .map(|f| FieldSpec::parse(&f.name, &f.kind))
                .collect::<Result<Vec<_>, _>>()?;
            registry.register(RecordSchema::new(record_type, fields))?;
        }

        for &record_type in &config.supported_types {
            if registry.contains(record_type) {
                continue;
            }
            registry.register_builtin(record_type)?;
        }

        debug!(types = registry.len(), "Schema registry built");
        Ok(registry)
    }

    /// Registers the catalog layout for `record_type`.
    pub fn register_builtin(&mut self, record_type: RecordType) -> Result<(), CodecError> {
        let fields =
            builtin_fields(record_type).ok_or(CodecError::NoSchemaDefinition(record_type))?;
        let schema = RecordSchema::from_annotations(record_type, fields.iter().copied())?;
        self.register(schema)
    }

    pub fn register(&mut self, schema: RecordSchema) -> Result<(), CodecError> {
        let record_type = schema.record_type();
        if self.schemas.contains_key(&record_type) {
            return Err(CodecError::AlreadyRegistered(record_type));
        }

        debug!(
            record_type = %record_type,
            fields = schema.len(),
            "Registered record schema"
        );
        self.schemas.insert(record_type, schema);
        Ok(())
    }

    pub fn lookup(&self, record_type: RecordType) -> Option<&RecordSchema> {
        self.schemas.get(&record_type)
    }

    /// Resolves a numeric type code from a header.
    pub fn lookup_code(&self, code: u16) -> Result<&RecordSchema, CodecError> {
        RecordType::from_u16(code)
            .and_then(|record_type| self.lookup(record_type))
            .ok_or(CodecError::UnregisteredType(code))
    }

    pub fn contains(&self, record_type: RecordType) -> bool {
        self.schemas.contains_key(&record_type)
    }

    pub fn record_types(&self) -> impl Iterator<Item = RecordType> + '_ {
        self.schemas.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rrwire_domain::{FieldDefinition, FieldKind, SchemaDefinition};

    #[test]
    fn test_default_config_registers_five_types() {
        let registry = SchemaRegistry::from_config(&CodecConfig::default()).unwrap();
        assert_eq!(registry.len(), 5);
        for record_type in [
            RecordType::A,
            RecordType::AAAA,
            RecordType::L32,
            RecordType::MX,
            RecordType::NID,
        ] {
            assert!(registry.contains(record_type));
        }
        assert!(!registry.contains(RecordType::SOA));
    }

    #[test]
    fn test_lookup_code() {
        let registry = SchemaRegistry::from_config(&CodecConfig::default()).unwrap();
        let schema = registry.lookup_code(15).unwrap();
        assert_eq!(schema.fields()[1].kind, FieldKind::CompressibleDomainName);

        assert_eq!(
            registry.lookup_code(6).unwrap_err(),
            CodecError::UnregisteredType(6)
        );
        assert_eq!(
            registry.lookup_code(4242).unwrap_err(),
            CodecError::UnregisteredType(4242)
        );
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = SchemaRegistry::new();
        registry.register_builtin(RecordType::A).unwrap();
        assert_eq!(
            registry.register_builtin(RecordType::A).unwrap_err(),
            CodecError::AlreadyRegistered(RecordType::A)
        );
    }

    #[test]
    fn test_type_without_layout_fails() {
        let mut registry = SchemaRegistry::new();
        assert_eq!(
            registry.register_builtin(RecordType::RRSIG).unwrap_err(),
            CodecError::NoSchemaDefinition(RecordType::RRSIG)
        );
    }

    #[test]
    fn test_duplicate_supported_type_rejected() {
        let config = CodecConfig {
            supported_types: vec![RecordType::A, RecordType::MX, RecordType::A],
            ..CodecConfig::default()
        };
        assert!(matches!(
            SchemaRegistry::from_config(&config),
            Err(CodecError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_custom_schema_overrides_catalog() {
        let config = CodecConfig {
            supported_types: vec![RecordType::A],
            compression: true,
            schemas: vec![SchemaDefinition {
                record_type: "a".to_string(),
                fields: vec![
                    FieldDefinition {
                        name: "Reserved".to_string(),
                        kind: "-".to_string(),
                    },
                    FieldDefinition {
                        name: "A".to_string(),
                        kind: "a".to_string(),
                    },
                ],
            }],
        };
        let registry = SchemaRegistry::from_config(&config).unwrap();
        assert_eq!(registry.lookup(RecordType::A).unwrap().len(), 2);
    }
}
