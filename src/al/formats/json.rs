//! serde-backed formats

use super::registry::{FormatError, Formatter};
use crate::al::ast::SymbolObject;

/// Pretty-printed JSON, camelCase keys, tagged with `kind`
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, object: &SymbolObject) -> Result<String, FormatError> {
        serde_json::to_string_pretty(object)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "JSON symbol tree, readable back as symbol metadata"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, object: &SymbolObject) -> Result<String, FormatError> {
        serde_yaml::to_string(object).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML symbol tree"
    }
}
