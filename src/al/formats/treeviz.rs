//! Treeviz formatter for symbol objects
//!
//! One line per node, nesting shown with box-drawing connectors, 2 columns per level:
//!
//!   ▣ table 50000 Customer Ext
//!   ├─ ☰ fields
//!   │ ├─ • 1 No. : Code[20]
//!   │ └─ • 2 Name : Text[100]
//!   └─ ☰ keys
//!     └─ ⚷ PK (No.)
//!
//! Page controls in the second layout column end with `‖`.
//!
//! Icons
//!     Objects:   table ▣  page ▤  other ◇  unparsed ∅
//!     Sections:  ☰
//!     Controls:  field •  part ◫  group ▦  area ▭  repeater ⟳  action ▶  key ⚷
//!     Properties: ·

use super::registry::{FormatError, Formatter};
use crate::al::ast::{PageControl, Property, SymbolObject};

const MAX_LABEL: usize = 48;

struct Node {
    icon: &'static str,
    label: String,
    children: Vec<Node>,
}

impl Node {
    fn new(icon: &'static str, label: impl Into<String>) -> Self {
        Self {
            icon,
            label: label.into(),
            children: Vec::new(),
        }
    }

    fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        s.to_string()
    }
}

/// Get the icon for a control type
fn control_icon(control_type: &str) -> &'static str {
    match control_type.to_ascii_lowercase().as_str() {
        "field" => "•",
        "part" | "systempart" => "◫",
        "group" | "cuegroup" | "fixed" | "grid" => "▦",
        "area" => "▭",
        "repeater" => "⟳",
        "action" => "▶",
        "key" => "⚷",
        _ => "○",
    }
}

fn property_nodes(properties: &[Property], show: bool) -> Vec<Node> {
    if !show {
        return Vec::new();
    }
    properties
        .iter()
        .map(|p| Node::new("·", format!("{} = {}", p.name, p.value)))
        .collect()
}

fn page_control_node(control: &PageControl, show_properties: bool) -> Node {
    let mut label = if control.caption.is_empty() {
        control.control_type.clone()
    } else {
        format!("{} {}", control.control_type, control.caption)
    };
    if control.separator {
        label.push_str(" ‖");
    }
    let mut children = property_nodes(&control.properties, show_properties);
    children.extend(
        control
            .controls
            .iter()
            .map(|c| page_control_node(c, show_properties)),
    );
    Node::new(control_icon(&control.control_type), label).with_children(children)
}

fn object_node(object: &SymbolObject, show_properties: bool) -> Node {
    let header = object.header();
    let label = format!("{} {} {}", header.object_type, header.id, header.name);
    let mut children = property_nodes(&header.properties, show_properties);

    let icon = match object {
        SymbolObject::Table(table) => {
            let fields = table
                .fields
                .iter()
                .map(|f| {
                    let label = match &f.data_type {
                        Some(data_type) => format!("{} {} : {}", f.id, f.name, data_type),
                        None => format!("{} {}", f.id, f.name),
                    };
                    Node::new(control_icon(&f.control_type), label)
                        .with_children(property_nodes(&f.properties, show_properties))
                })
                .collect();
            let keys = table
                .keys
                .iter()
                .map(|k| {
                    Node::new(
                        control_icon(&k.control_type),
                        format!("{} ({})", k.name, k.field_names.join(", ")),
                    )
                    .with_children(property_nodes(&k.properties, show_properties))
                })
                .collect();
            children.push(Node::new("☰", "fields").with_children(fields));
            children.push(Node::new("☰", "keys").with_children(keys));
            "▣"
        }
        SymbolObject::Page(page) => {
            let controls = page
                .controls
                .iter()
                .map(|c| page_control_node(c, show_properties))
                .collect();
            let actions = page
                .actions
                .iter()
                .map(|c| page_control_node(c, show_properties))
                .collect();
            children.push(Node::new("☰", "controls").with_children(controls));
            children.push(Node::new("☰", "actions").with_children(actions));
            "▤"
        }
        SymbolObject::Unsupported(_) if !object.is_parsed() => {
            return Node::new("∅", "unparsed object");
        }
        SymbolObject::Unsupported(_) => "◇",
    };

    Node::new(icon, label).with_children(children)
}

fn format_node(node: &Node, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        node.icon,
        truncate(&node.label, MAX_LABEL)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(&node.children, &child_prefix, output);
}

fn format_children(children: &[Node], prefix: &str, output: &mut String) {
    let count = children.len();
    for (i, child) in children.iter().enumerate() {
        format_node(child, prefix, i == count - 1, output);
    }
}

/// Render `object` as a treeviz string.
pub fn to_treeviz_str(object: &SymbolObject, show_properties: bool) -> String {
    let root = object_node(object, show_properties);
    let mut output = format!("{} {}\n", root.icon, truncate(&root.label, MAX_LABEL));
    format_children(&root.children, "", &mut output);
    output
}

/// Formatter implementation for treeviz format
#[derive(Debug, Clone, Copy, Default)]
pub struct TreevizFormatter {
    show_properties: bool,
}

impl TreevizFormatter {
    pub fn new(show_properties: bool) -> Self {
        Self { show_properties }
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, object: &SymbolObject) -> Result<String, FormatError> {
        Ok(to_treeviz_str(object, self.show_properties))
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::al::ast::{FieldControl, KeyControl, ObjectHeader, Table};

    fn table() -> SymbolObject {
        SymbolObject::Table(Table {
            header: ObjectHeader {
                id: 50000,
                name: "Customer Ext".to_string(),
                object_type: "table".to_string(),
                properties: vec![Property::new("DataClassification", "CustomerContent")],
                ..Default::default()
            },
            fields: vec![FieldControl {
                control_type: "field".to_string(),
                id: "1".to_string(),
                name: "No.".to_string(),
                caption: "No.".to_string(),
                data_type: Some("Code[20]".to_string()),
                ..Default::default()
            }],
            keys: vec![KeyControl {
                control_type: "key".to_string(),
                name: "PK".to_string(),
                caption: "PK".to_string(),
                field_names: vec!["No.".to_string()],
                ..Default::default()
            }],
            field_groups: Vec::new(),
        })
    }

    #[test]
    fn test_table_tree() {
        let expected = "\
▣ table 50000 Customer Ext
├─ ☰ fields
│ └─ • 1 No. : Code[20]
└─ ☰ keys
  └─ ⚷ PK (No.)
";
        assert_eq!(to_treeviz_str(&table(), false), expected);
    }

    #[test]
    fn test_properties_are_optional() {
        let out = to_treeviz_str(&table(), true);
        assert!(out.contains("├─ · DataClassification = CustomerContent\n"));
    }

    #[test]
    fn test_unparsed_object() {
        assert_eq!(
            to_treeviz_str(&SymbolObject::default(), false),
            "∅ unparsed object\n"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc…");
    }
}
