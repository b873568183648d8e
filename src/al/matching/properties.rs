//! Property line parsing
//!
//! A property is a single `Name = Value;` line. Names are bare identifiers, which
//! keeps trigger code (`Rec."No." := …`, `if x = y then`) out of the list.

use crate::al::ast::Property;
use once_cell::sync::Lazy;
use regex::Regex;

static PROPERTY_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\s*=\s*(.*)$").unwrap());

/// Parse one line. Splits on the first `=`; one trailing `;` is dropped.
pub fn parse_property_line(line: &str) -> Option<Property> {
    let caps = PROPERTY_LINE.captures(line.trim())?;
    let value = caps[2].trim();
    let value = value.strip_suffix(';').unwrap_or(value).trim_end();
    Some(Property::new(&caps[1], value))
}

/// Parse every property line in `text`, in order. Other lines are skipped.
pub fn parse_properties(text: &str) -> Vec<Property> {
    text.lines().filter_map(parse_property_line).collect()
}
