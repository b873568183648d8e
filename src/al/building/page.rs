//! Page objects: `controls` and `actions`
//!
//! Every child region of the page contributes its own children: `actions` to
//! [`Page::actions`], everything else (`layout`, `views`, …) to [`Page::controls`].
//! Controls nest as deep as the regions do.

use super::captions::resolve_caption;
use super::layout::starts_second_column;
use super::split::split_source_expression;
use crate::al::ast::{ObjectHeader, ObjectRegion, Page, PageControl};
use crate::al::header::upper_first;

pub fn build_page(region: &ObjectRegion, header: ObjectHeader) -> Page {
    let mut page = Page {
        header,
        ..Default::default()
    };

    for child in &region.children {
        let controls = expand_controls(&child.children, None);
        if child.region.eq_ignore_ascii_case("actions") {
            page.actions.extend(controls);
        } else {
            page.controls.extend(controls);
        }
    }

    page
}

/// One control per region, in order, each with its own nested controls.
pub fn expand_controls(children: &[ObjectRegion], parent: Option<&PageControl>) -> Vec<PageControl> {
    let count = children.len();
    let inherited = parent.is_some_and(|p| p.separator);

    children
        .iter()
        .enumerate()
        .map(|(index, child)| {
            let mut control = page_control(child);
            control.separator = inherited || starts_second_column(index + 1, count);
            control.parent = parent.map(PageControl::snapshot);
            let nested = expand_controls(&child.children, Some(&control));
            control.controls = nested;
            control
        })
        .collect()
}

fn page_control(region: &ObjectRegion) -> PageControl {
    let is_bound = ["field", "part"]
        .iter()
        .any(|kind| region.region.eq_ignore_ascii_case(kind));
    let (name, source_expression) = if is_bound {
        split_source_expression(region.name_str())
    } else {
        (upper_first(region.name_str()), String::new())
    };

    PageControl {
        control_type: region.region.clone(),
        caption: resolve_caption(&region.properties, &name),
        name,
        source_expression,
        source: region.source.clone(),
        properties: region.properties.clone(),
        ..Default::default()
    }
}
