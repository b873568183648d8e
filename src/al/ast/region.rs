//! Generic region nodes produced by the region matcher

use serde::{Deserialize, Serialize};

/// A single `Name = Value;` declaration inside a region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A brace-delimited region and everything nested inside it.
///
/// `object_type` is only set for numbered headers (`table 50000 "Customer"`);
/// sub-regions such as `fields` or `group(General)` leave it empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjectRegion {
    /// Region keyword (`table`, `fields`, `field`, `group`, …)
    pub region: String,
    pub id: Option<u32>,
    pub name: Option<String>,
    pub object_type: String,
    /// Target of an `extends` clause on extension objects
    pub extends: Option<String>,
    /// Verbatim header line
    pub source: String,
    /// Byte offset of the opening brace in the parsed text
    pub offset: usize,
    pub properties: Vec<Property>,
    pub children: Vec<ObjectRegion>,
}

impl ObjectRegion {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Name with `None` collapsed to the empty string.
    pub fn name_str(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Total number of regions in this subtree, including `self`.
    pub fn region_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(ObjectRegion::region_count)
            .sum::<usize>()
    }
}
