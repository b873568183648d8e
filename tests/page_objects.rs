//! Page objects parsed from the sample sources
//!
//! Covers control nesting, source expressions, captions, actions and the two-column
//! separator layout.

use aldesign::al::ast::{DiagnosticCode, Page, PageControl, SymbolObject};
use aldesign::al::testing::Sample;
use aldesign::ObjectParser;
use rstest::rstest;

fn customer_card() -> Page {
    let parsed = Sample::CustomerCard.parse();
    assert!(parsed.diagnostics.is_empty(), "{:?}", parsed.diagnostics);
    match parsed.object {
        SymbolObject::Page(page) => page,
        other => panic!("expected a page, got {:?}", other),
    }
}

fn content(page: &Page) -> &PageControl {
    &page.controls[0]
}

#[test]
fn test_header_and_page_type() {
    let page = customer_card();
    assert_eq!(page.header.id, 50101);
    assert_eq!(page.header.name, "Loyalty Customer Card");
    assert_eq!(page.page_type(), Some("Card"));
    assert_eq!(page.header.properties.len(), 3);
}

#[test]
fn test_control_tree_shape() {
    let page = customer_card();
    assert_eq!(page.controls.len(), 1);

    let area = content(&page);
    assert_eq!(area.control_type, "area");
    assert_eq!(area.name, "Content");
    assert_eq!(area.parent, None);

    let children: Vec<_> = area
        .controls
        .iter()
        .map(|c| (c.control_type.as_str(), c.name.as_str()))
        .collect();
    assert_eq!(
        children,
        vec![("group", "General"), ("group", "Points"), ("part", "Entries")]
    );
    assert_eq!(area.controls[0].controls.len(), 3);
    assert_eq!(area.controls[1].controls.len(), 2);
}

#[rstest]
#[case(0, "No.", "Rec.No.", "No.")]
#[case(1, "Name", "Rec.Name", "Name")]
#[case(2, "Search Name", "Rec.Search Name", "Search")]
fn test_general_fields(
    #[case] index: usize,
    #[case] name: &str,
    #[case] source_expression: &str,
    #[case] caption: &str,
) {
    let page = customer_card();
    let field = &content(&page).controls[0].controls[index];
    assert_eq!(field.control_type, "field");
    assert_eq!(field.name, name);
    assert_eq!(field.source_expression, source_expression);
    assert_eq!(field.caption, caption);
    assert_eq!(field.properties[0].name, "ApplicationArea");
}

#[test]
fn test_part_source_expression_and_properties() {
    let page = customer_card();
    let part = &content(&page).controls[2];
    assert_eq!(part.source_expression, "Loyalty Entries Part");
    assert_eq!(part.caption, "Entries");
    assert_eq!(part.properties[0].name, "SubPageLink");
    assert_eq!(part.properties[0].value, "\"Customer No.\" = field(\"No.\")");
}

#[test]
fn test_group_caption_from_property() {
    let page = customer_card();
    let general = &content(&page).controls[0];
    assert_eq!(general.caption, "General");
    assert_eq!(general.properties.len(), 1);
}

#[test]
fn test_separator_layout() {
    let page = customer_card();
    let area = content(&page);
    assert!(!area.separator);

    let groups: Vec<_> = area.controls.iter().map(|c| c.separator).collect();
    assert_eq!(groups, vec![false, false, true]);

    let general: Vec<_> = area.controls[0].controls.iter().map(|c| c.separator).collect();
    assert_eq!(general, vec![false, false, true]);

    let points: Vec<_> = area.controls[1].controls.iter().map(|c| c.separator).collect();
    assert_eq!(points, vec![true, true]);
}

#[test]
fn test_parent_snapshots() {
    let page = customer_card();
    let field = &content(&page).controls[0].controls[0];
    let parent = field.parent.as_ref().unwrap();
    assert_eq!(parent.control_type, "group");
    assert_eq!(parent.name, "General");
    assert!(!parent.separator);
}

#[test]
fn test_actions() {
    let page = customer_card();
    assert_eq!(page.actions.len(), 1);

    let processing = &page.actions[0];
    assert_eq!(processing.name, "Processing");

    let actions: Vec<_> = processing
        .controls
        .iter()
        .map(|c| (c.name.as_str(), c.caption.as_str(), c.separator))
        .collect();
    assert_eq!(
        actions,
        vec![
            ("Recalculate", "Recalculate Points", true),
            ("Block", "Block", true)
        ]
    );
    assert_eq!(processing.controls[0].properties.len(), 2);
}

#[test]
fn test_fields_flattened() {
    let page = customer_card();
    let names: Vec<_> = page.fields().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["No.", "Name", "Search Name", "Points Balance", "Blocked"]
    );
}

#[rstest]
#[case(0, vec![])]
#[case(1, vec![false])]
#[case(2, vec![true, true])]
#[case(3, vec![false, false, true])]
#[case(4, vec![false, true, true, true])]
#[case(5, vec![false, false, false, true, true])]
fn test_separator_by_sibling_count(#[case] count: usize, #[case] expected: Vec<bool>) {
    let fields: String = (0..count)
        .map(|i| format!("      field(F{i}; Rec.F{i}) {{ }}\n"))
        .collect();
    let source = format!(
        "page 1 \"P\"\n{{\n  layout\n  {{\n    area(content)\n    {{\n{fields}    }}\n  }}\n}}\n"
    );
    let parsed = ObjectParser::new().parse_text(&source);
    let page = parsed.object.as_page().unwrap();
    let flags: Vec<_> = page.controls[0].controls.iter().map(|c| c.separator).collect();
    assert_eq!(flags, expected);
}

#[test]
fn test_page_extension_is_unsupported_with_target() {
    let parsed = Sample::CustomerCardExtension.parse();
    let header = parsed.object.header();
    assert!(matches!(parsed.object, SymbolObject::Unsupported(_)));
    assert_eq!(header.object_type, "pageextension");
    assert_eq!(header.id, 50104);
    assert_eq!(header.name, "Customer Card Loyalty");
    assert_eq!(header.extends.as_deref(), Some("Customer Card"));
    assert_eq!(parsed.diagnostics[0].code, DiagnosticCode::UnsupportedObject);
}

#[test]
fn test_codeunit_is_bare_object() {
    let parsed = Sample::PostingCodeunit.parse();
    assert_eq!(parsed.object.object_type(), "codeunit");
    assert_eq!(parsed.object.name(), "Loyalty Posting");
    assert!(parsed.object.as_table().is_none());
    assert!(parsed.object.as_page().is_none());
    assert_eq!(
        parsed.object.property("Permissions").map(|p| p.value.as_str()),
        Some("tabledata \"Loyalty Entry\" = rimd")
    );
}
