//! Table objects: `fields` and `keys`

use super::captions::resolve_caption;
use super::split::{split_key, split_table_field};
use crate::al::ast::{FieldControl, KeyControl, ObjectHeader, ObjectRegion, Table};
use crate::al::header::upper_first;

/// Build a table. Child regions other than `fields` and `keys` are ignored.
pub fn build_table(region: &ObjectRegion, header: ObjectHeader) -> Table {
    let mut table = Table {
        header,
        ..Default::default()
    };

    for child in &region.children {
        if child.region.eq_ignore_ascii_case("fields") {
            table
                .fields
                .extend(child.children.iter().map(field_control));
        } else if child.region.eq_ignore_ascii_case("keys") {
            table.keys.extend(child.children.iter().map(key_control));
        }
    }

    table
}

fn field_control(region: &ObjectRegion) -> FieldControl {
    let (id, name, data_type) = if region.region.eq_ignore_ascii_case("field") {
        let header = split_table_field(region.name_str());
        (header.id, header.name, header.data_type)
    } else {
        (String::new(), upper_first(region.name_str()), None)
    };

    FieldControl {
        control_type: region.region.clone(),
        caption: resolve_caption(&region.properties, &name),
        id,
        name,
        data_type,
        source: region.source.clone(),
        properties: region.properties.clone(),
    }
}

fn key_control(region: &ObjectRegion) -> KeyControl {
    let (name, field_names) = if region.region.eq_ignore_ascii_case("key") {
        split_key(region.name_str())
    } else {
        (upper_first(region.name_str()), Vec::new())
    };

    KeyControl {
        control_type: region.region.clone(),
        caption: resolve_caption(&region.properties, &name),
        name,
        field_names,
        source: region.source.clone(),
        properties: region.properties.clone(),
    }
}
