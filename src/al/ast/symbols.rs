//! Typed symbol objects
//!
//! The builder turns a root [`ObjectRegion`](super::ObjectRegion) into one of the
//! [`SymbolObject`] variants. Only tables and pages carry child collections; every
//! other object kind is kept as its bare [`ObjectHeader`].

use super::region::Property;
use serde::{Deserialize, Serialize};

/// Fields shared by every object kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectHeader {
    pub id: u32,
    pub name: String,
    /// Lower-cased object keyword; empty when the header was not recognized
    #[serde(rename = "type")]
    pub object_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// The typed result of parsing one object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SymbolObject {
    Table(Table),
    Page(Page),
    Unsupported(ObjectHeader),
}

impl SymbolObject {
    pub fn header(&self) -> &ObjectHeader {
        match self {
            SymbolObject::Table(table) => &table.header,
            SymbolObject::Page(page) => &page.header,
            SymbolObject::Unsupported(header) => header,
        }
    }

    pub fn id(&self) -> u32 {
        self.header().id
    }

    pub fn name(&self) -> &str {
        &self.header().name
    }

    pub fn object_type(&self) -> &str {
        &self.header().object_type
    }

    pub fn properties(&self) -> &[Property] {
        &self.header().properties
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties().iter().find(|p| p.name == name)
    }

    /// False when no object header could be recognized at all.
    pub fn is_parsed(&self) -> bool {
        !self.object_type().is_empty()
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            SymbolObject::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_page(&self) -> Option<&Page> {
        match self {
            SymbolObject::Page(page) => Some(page),
            _ => None,
        }
    }
}

impl Default for SymbolObject {
    fn default() -> Self {
        SymbolObject::Unsupported(ObjectHeader::default())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[serde(flatten)]
    pub header: ObjectHeader,
    #[serde(default)]
    pub fields: Vec<FieldControl>,
    #[serde(default)]
    pub keys: Vec<KeyControl>,
    /// No source region populates this yet; kept so consumers see a stable shape.
    #[serde(default)]
    pub field_groups: Vec<Control>,
}

impl Table {
    pub fn field(&self, name: &str) -> Option<&FieldControl> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// The first key, which AL treats as the primary key.
    pub fn primary_key(&self) -> Option<&KeyControl> {
        self.keys.first()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(flatten)]
    pub header: ObjectHeader,
    #[serde(default)]
    pub controls: Vec<PageControl>,
    #[serde(default)]
    pub actions: Vec<PageControl>,
}

impl Page {
    /// `PageType` property value, if declared.
    pub fn page_type(&self) -> Option<&str> {
        self.header
            .properties
            .iter()
            .find(|p| p.name == "PageType")
            .map(|p| p.value.as_str())
    }

    /// Depth-first walk over every control under `controls`.
    pub fn all_controls(&self) -> Vec<&PageControl> {
        let mut out = Vec::new();
        for control in &self.controls {
            control.collect_into(&mut out);
        }
        out
    }

    /// Every `field` control under `controls`, in source order.
    pub fn fields(&self) -> Vec<&PageControl> {
        self.all_controls()
            .into_iter()
            .filter(|c| c.control_type == "field")
            .collect()
    }
}

/// A child of a table `fields` region.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldControl {
    pub control_type: String,
    /// Field number as written in the header (`"1"`)
    pub id: String,
    pub name: String,
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub properties: Vec<Property>,
}

impl FieldControl {
    pub fn number(&self) -> Option<u32> {
        self.id.parse().ok()
    }
}

/// A child of a table `keys` region.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyControl {
    pub control_type: String,
    pub name: String,
    pub caption: String,
    #[serde(default)]
    pub field_names: Vec<String>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// A node of a page's `controls` or `actions` tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageControl {
    pub control_type: String,
    pub name: String,
    pub caption: String,
    #[serde(default)]
    pub source_expression: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub properties: Vec<Property>,
    /// Starts (or belongs to) the second visual column
    #[serde(default)]
    pub separator: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentSnapshot>,
    #[serde(default)]
    pub controls: Vec<PageControl>,
}

impl PageControl {
    pub fn snapshot(&self) -> ParentSnapshot {
        ParentSnapshot {
            control_type: self.control_type.clone(),
            name: self.name.clone(),
            separator: self.separator,
        }
    }

    fn collect_into<'a>(&'a self, out: &mut Vec<&'a PageControl>) {
        out.push(self);
        for child in &self.controls {
            child.collect_into(out);
        }
    }
}

/// Value copy of the enclosing control. Never a live reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentSnapshot {
    pub control_type: String,
    pub name: String,
    pub separator: bool,
}

/// Generic control shape (table field groups).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    pub control_type: String,
    pub name: String,
    pub caption: String,
    #[serde(default)]
    pub properties: Vec<Property>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control(control_type: &str, name: &str, children: Vec<PageControl>) -> PageControl {
        PageControl {
            control_type: control_type.to_string(),
            name: name.to_string(),
            caption: name.to_string(),
            controls: children,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_object_is_unparsed() {
        let object = SymbolObject::default();
        assert!(!object.is_parsed());
        assert_eq!(object.id(), 0);
        assert!(object.as_table().is_none());
    }

    #[test]
    fn test_page_walks_nested_controls_depth_first() {
        let page = Page {
            controls: vec![control(
                "area",
                "Content",
                vec![
                    control("group", "General", vec![control("field", "No.", vec![])]),
                    control("field", "Name", vec![]),
                ],
            )],
            ..Default::default()
        };

        let names: Vec<_> = page.all_controls().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Content", "General", "No.", "Name"]);

        let fields: Vec<_> = page.fields().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(fields, vec!["No.", "Name"]);
    }

    #[test]
    fn test_snapshot_drops_children() {
        let parent = control("group", "General", vec![control("field", "No.", vec![])]);
        let snapshot = parent.snapshot();
        assert_eq!(snapshot.control_type, "group");
        assert_eq!(snapshot.name, "General");
        assert!(!snapshot.separator);
    }

    #[test]
    fn test_json_shape_is_tagged_and_camel_cased() {
        let table = SymbolObject::Table(Table {
            header: ObjectHeader {
                id: 50000,
                name: "Customer Ext".to_string(),
                object_type: "table".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });

        let value = serde_json::to_value(&table).unwrap();
        assert_eq!(value["kind"], "table");
        assert_eq!(value["type"], "table");
        assert_eq!(value["id"], 50000);
        assert!(value["fieldGroups"].as_array().unwrap().is_empty());

        let back: SymbolObject = serde_json::from_value(value).unwrap();
        assert_eq!(back, table);
    }
}
