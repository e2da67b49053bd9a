use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use crate::RecordType;

/// Codec configuration: which record types get a schema, and how messages
/// are encoded.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CodecConfig {
    /// Record types registered from the built-in catalog
    #[serde(default = "default_supported_types")]
    pub supported_types: Vec<RecordType>,

    /// Compress domain names when encoding whole messages
    #[serde(default = "default_true")]
    pub compression: bool,

    /// Schemas declared in configuration; these take precedence over the catalog
    #[serde(default)]
    pub schemas: Vec<SchemaDefinition>,
}

/// A record type layout written in the field-kind vocabulary.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchemaDefinition {
    #[serde(rename = "type")]
    pub record_type: String,

    pub fields: Vec<FieldDefinition>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FieldDefinition {
    pub name: String,

    pub kind: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            supported_types: default_supported_types(),
            compression: true,
            schemas: Vec::new(),
        }
    }
}

impl CodecConfig {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. rrwire.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("rrwire.toml").exists() {
            Self::from_file("rrwire.toml")?
        } else {
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.supported_types.is_empty() && self.schemas.is_empty() {
            return Err(ConfigError::Validation(
                "at least one record type must be supported".to_string(),
            ));
        }

        for (i, record_type) in self.supported_types.iter().enumerate() {
            if self.supported_types[..i].contains(record_type) {
                return Err(ConfigError::Validation(format!(
                    "record type {} listed more than once",
                    record_type
                )));
            }
        }

        for schema in &self.schemas {
            if schema.fields.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "schema for {} declares no fields",
                    schema.record_type
                )));
            }
        }

        Ok(())
    }
}

fn default_supported_types() -> Vec<RecordType> {
    vec![
        RecordType::A,
        RecordType::AAAA,
        RecordType::L32,
        RecordType::MX,
        RecordType::NID,
    ]
}

fn default_true() -> bool {
    true
}
