//! Pre-compiled symbol lookup
//!
//! Object discovery belongs to the surrounding toolchain. It is modelled here as the
//! [`ObjectCollector`] trait so the parser can resolve an object from its symbol
//! metadata instead of its source text.

use crate::al::ast::SymbolObject;
use crate::al::error::{AlError, AlResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Opaque symbol metadata as delivered by the toolchain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolData(pub serde_json::Value);

/// One discovered object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectorItem {
    pub id: u32,
    #[serde(rename = "type")]
    pub object_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fs_path: Option<PathBuf>,
    #[serde(default)]
    pub symbol_data: Option<SymbolData>,
}

impl CollectorItem {
    pub fn new(object_type: impl Into<String>, id: u32) -> Self {
        Self {
            id,
            object_type: object_type.into(),
            ..Default::default()
        }
    }

    /// Same id, same type ignoring case.
    pub fn matches(&self, other: &CollectorItem) -> bool {
        self.id == other.id && self.object_type.eq_ignore_ascii_case(&other.object_type)
    }
}

/// Source of discovered objects and their symbols.
pub trait ObjectCollector {
    fn discover(&self) -> AlResult<Vec<CollectorItem>>;

    /// Decode symbol metadata. The default reads the JSON shape the `json` format writes.
    fn resolve_symbol(&self, data: &SymbolData) -> AlResult<SymbolObject> {
        serde_json::from_value(data.0.clone()).map_err(|e| AlError::MalformedSymbol(e.to_string()))
    }
}
