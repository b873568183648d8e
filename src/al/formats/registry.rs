//! Output formats by name
//!
//! The CLI and library callers pick a format with a string (`output.format` in the
//! config, `--format` on the command line). [`FormatRegistry`] maps that string to a
//! [`Formatter`].

use crate::al::ast::SymbolObject;
use crate::al::config::OutputConfig;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No formatter registered under this name
    FormatNotFound(String),
    /// The formatter could not render the object
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Renders one symbol object as text.
pub trait Formatter {
    fn name(&self) -> &str;

    fn serialize(&self, object: &SymbolObject) -> Result<String, FormatError>;

    /// One line for `aldesign list-formats`.
    fn description(&self) -> &str {
        ""
    }
}

/// Formatters keyed by name, iterated in name order.
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            formatters: BTreeMap::new(),
        }
    }

    /// The built-in formatters (`treeviz`, `json`, `yaml`) set up from `output`.
    pub fn from_config(output: &OutputConfig) -> Self {
        let mut registry = Self::new();
        registry.register(super::TreevizFormatter::new(output.show_properties));
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry
    }

    /// Add `formatter`. A formatter already registered under the same name is replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn serialize(&self, object: &SymbolObject, format: &str) -> Result<String, FormatError> {
        self.get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?
            .serialize(object)
    }

    pub fn list_formats(&self) -> Vec<String> {
        self.formatters.keys().cloned().collect()
    }
}

impl Default for FormatRegistry {
    /// Built-ins without properties in the tree.
    fn default() -> Self {
        Self::from_config(&OutputConfig {
            format: "treeviz".to_string(),
            show_properties: false,
        })
    }
}
