//! Object kind dispatch

use super::page::build_page;
use super::table::build_table;
use crate::al::ast::{ObjectHeader, ObjectRegion, SymbolObject};
use tracing::debug;

/// Object kinds that get a typed symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Table,
    Page,
    Other,
}

impl ObjectKind {
    pub fn from_type(object_type: &str) -> Self {
        match object_type.to_ascii_lowercase().as_str() {
            "table" => ObjectKind::Table,
            "page" => ObjectKind::Page,
            _ => ObjectKind::Other,
        }
    }
}

/// Base fields of the object declared by `region`.
pub fn object_header(region: &ObjectRegion) -> ObjectHeader {
    ObjectHeader {
        id: region.id.unwrap_or(0),
        name: region.name.clone().unwrap_or_default(),
        object_type: region.object_type.clone(),
        extends: region.extends.clone(),
        properties: region.properties.clone(),
    }
}

/// Build the typed symbol for a root region.
///
/// Kinds other than table and page come back as [`SymbolObject::Unsupported`];
/// a root without a recognizable header has an empty `object_type`.
pub fn build_symbol(region: &ObjectRegion) -> SymbolObject {
    let header = object_header(region);
    let kind = ObjectKind::from_type(&region.object_type);
    debug!(?kind, id = header.id, name = %header.name, "building symbol");

    match kind {
        ObjectKind::Table => SymbolObject::Table(build_table(region, header)),
        ObjectKind::Page => SymbolObject::Page(build_page(region, header)),
        ObjectKind::Other => SymbolObject::Unsupported(header),
    }
}
