//! Quick object summary
//!
//! A cheap scan that answers "what object is this and which fields does it show"
//! without building the region tree. Used for object lists, where parsing every
//! file fully would be wasted work.

use crate::al::header::strip_quotes;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static OBJECT_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mi)^\s*([a-z]+)\s+([0-9]+)\s+(.*)$").unwrap());

static FIELD_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?mi)\bfield\((.*)\)").unwrap());

static PAGE_TYPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"PageType\s*=\s*([^;]*);").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSummary {
    pub object_type: String,
    pub id: u32,
    pub name: String,
    /// `PageType` of a page; empty otherwise
    pub sub_type: String,
    /// Field names in source order (tables and pages only)
    pub fields: Vec<String>,
}

/// Summarize the first object declared in `text`. `None` if there is none.
pub fn summarize(text: &str) -> Option<ObjectSummary> {
    let caps = OBJECT_HEADER.captures(text)?;
    let object_type = caps[1].to_ascii_lowercase();
    let id = caps[2].parse().ok()?;
    let name = strip_quotes(&caps[3]);

    let mut summary = ObjectSummary {
        object_type,
        id,
        name,
        sub_type: String::new(),
        fields: Vec::new(),
    };

    if summary.object_type == "table" || summary.object_type == "page" {
        summary.sub_type = PAGE_TYPE
            .captures(text)
            .map(|c| c[1].trim().to_string())
            .unwrap_or_default();
        summary.fields = FIELD_HEADER
            .captures_iter(text)
            .filter_map(|c| c[1].split(';').nth(1).map(strip_quotes))
            .collect();
    }

    Some(summary)
}
