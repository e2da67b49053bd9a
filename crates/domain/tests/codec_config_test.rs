use rrwire_domain::{CodecConfig, ConfigError, RecordType};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_default_config() {
    let config = CodecConfig::default();
    assert_eq!(
        config.supported_types,
        vec![
            RecordType::A,
            RecordType::AAAA,
            RecordType::L32,
            RecordType::MX,
            RecordType::NID
        ]
    );
    assert!(config.compression);
    assert!(config.schemas.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_partial_config_uses_defaults() {
    let config = CodecConfig::parse("compression = false").unwrap();
    assert!(!config.compression);
    assert_eq!(config.supported_types.len(), 5);
}

#[test]
fn test_parse_schemas() {
    let config = CodecConfig::parse(
        r#"
        supported_types = ["SOA"]

        [[schemas]]
        type = "EUI48"
        fields = [{ name = "Address", kind = "uint48" }]
        "#,
    )
    .unwrap();

    assert_eq!(config.supported_types, vec![RecordType::SOA]);
    assert_eq!(config.schemas.len(), 1);
    assert_eq!(config.schemas[0].record_type, "EUI48");
    assert_eq!(config.schemas[0].fields[0].kind, "uint48");
}

#[test]
fn test_supported_types_ignore_case() {
    let config = CodecConfig::parse(r#"supported_types = ["mx", "Aaaa", "L32"]"#).unwrap();
    assert_eq!(
        config.supported_types,
        vec![RecordType::MX, RecordType::AAAA, RecordType::L32]
    );
}

#[test]
fn test_parse_error() {
    let err = CodecConfig::parse("supported_types = [\"NOPE\"]").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_validate_duplicate_types() {
    let config = CodecConfig {
        supported_types: vec![RecordType::A, RecordType::MX, RecordType::A],
        ..CodecConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_empty_config() {
    let config = CodecConfig {
        supported_types: Vec::new(),
        ..CodecConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "supported_types = [\"A\", \"AAAA\"]").unwrap();
    writeln!(file, "compression = false").unwrap();

    let config = CodecConfig::load(Some(file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.supported_types, vec![RecordType::A, RecordType::AAAA]);
    assert!(!config.compression);
}

#[test]
fn test_load_missing_file() {
    let err = CodecConfig::load(Some("/nonexistent/rrwire.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileRead(_, _)));
}
