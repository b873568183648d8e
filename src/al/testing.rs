//! Test support
//!
//! Sample AL sources under `samples/` are the canonical inputs for tests. They are
//! embedded at compile time so tests do not depend on the working directory.
//!
//! ```rust,ignore
//! use aldesign::al::testing::Sample;
//!
//! let parsed = Sample::CustomerTable.parse();
//! let table = parsed.object.as_table().unwrap();
//! ```

use crate::al::ast::SymbolObject;
use crate::al::error::AlResult;
use crate::al::pipeline::{CollectorItem, ObjectCollector, ObjectParser, Parsed, SymbolData};

/// The embedded sample sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// Table with fields, keys, field groups, triggers and comments
    CustomerTable,
    /// Card page with nested groups, a part and actions
    CustomerCard,
    /// Codeunit (no typed symbol)
    PostingCodeunit,
    /// Table missing its final closing brace
    UnbalancedTable,
    /// Page extension with an `extends` clause
    CustomerCardExtension,
}

impl Sample {
    pub const ALL: [Sample; 5] = [
        Sample::CustomerTable,
        Sample::CustomerCard,
        Sample::PostingCodeunit,
        Sample::UnbalancedTable,
        Sample::CustomerCardExtension,
    ];

    pub fn source(&self) -> &'static str {
        match self {
            Sample::CustomerTable => include_str!("../../samples/customer_table.al"),
            Sample::CustomerCard => include_str!("../../samples/customer_card.al"),
            Sample::PostingCodeunit => include_str!("../../samples/posting_codeunit.al"),
            Sample::UnbalancedTable => include_str!("../../samples/unbalanced_table.al"),
            Sample::CustomerCardExtension => include_str!("../../samples/customer_card_ext.al"),
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Sample::CustomerTable => "customer_table.al",
            Sample::CustomerCard => "customer_card.al",
            Sample::PostingCodeunit => "posting_codeunit.al",
            Sample::UnbalancedTable => "unbalanced_table.al",
            Sample::CustomerCardExtension => "customer_card_ext.al",
        }
    }

    /// Parse with a default [`ObjectParser`].
    pub fn parse(&self) -> Parsed {
        ObjectParser::new().parse_text(self.source())
    }
}

/// In-memory collector with a fixed object list.
#[derive(Debug, Clone, Default)]
pub struct StaticCollector {
    items: Vec<CollectorItem>,
}

impl StaticCollector {
    pub fn new(items: Vec<CollectorItem>) -> Self {
        Self { items }
    }

    /// Register an object by serializing its symbol as metadata.
    pub fn with_symbol(mut self, object: &SymbolObject) -> Self {
        let mut item = CollectorItem::new(object.object_type(), object.id());
        item.name = object.name().to_string();
        let value = serde_json::to_value(object).expect("symbol objects serialize to JSON");
        item.symbol_data = Some(SymbolData(value));
        self.items.push(item);
        self
    }
}

impl ObjectCollector for StaticCollector {
    fn discover(&self) -> AlResult<Vec<CollectorItem>> {
        Ok(self.items.clone())
    }
}
