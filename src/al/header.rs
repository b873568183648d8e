//! Header Classification
//!
//! Decides what the line in front of an opening brace declares. AL mixes two header
//! vocabularies and we tell them apart with two ordered patterns plus a fallback:
//!
//! 1. numbered - `table 50000 "My Table"`, `pageextension 50100 "X" extends "Y"`
//! 2. parameterized - `group(General)`, `field("No."; Rec."No.")`, `key(PK; "No.")`
//! 3. anything else keeps the trimmed line as its region keyword (`fields`, `layout`)
//!
//! Order matters: the numbered form is tried first.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

static NUMBERED_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i)([a-z]+)\s+([0-9]+)(?:\s+(.*))?$").unwrap());

static PARAMETERIZED_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\s*\((.*)\)").unwrap());

/// The object name is one quoted run or one bare word; `extends` only counts after it.
static EXTENDS_CLAUSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(?i)("[^"]*"|[^\s"]+)\s+extends\s+(.+)$"#).unwrap());

static BARE_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Which header form a line matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderShape {
    /// `keyword id "name"`
    Numbered,
    /// `keyword(args)`
    Parameterized,
    /// A single bare keyword such as `fields` or `actions`
    Bare,
    /// Numbered shape whose id does not fit a `u32`
    InvalidId,
    /// Matched nothing; the trimmed line became the region keyword
    Unrecognized,
}

/// Everything a header line tells us about its region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionHeader {
    pub region: String,
    pub id: Option<u32>,
    pub name: Option<String>,
    pub object_type: String,
    pub extends: Option<String>,
    pub shape: HeaderShape,
}

impl RegionHeader {
    fn fallback(line: &str, shape: HeaderShape) -> Self {
        Self {
            region: line.to_string(),
            id: None,
            name: None,
            object_type: String::new(),
            extends: None,
            shape,
        }
    }
}

/// Classify a header line.
pub fn classify(line: &str) -> RegionHeader {
    let line = line.trim();

    if let Some(caps) = NUMBERED_HEADER.captures(line) {
        let keyword = caps[1].to_ascii_lowercase();
        let id = match caps[2].parse::<u32>() {
            Ok(id) => id,
            Err(_) => return RegionHeader::fallback(line, HeaderShape::InvalidId),
        };
        let rest = caps.get(3).map(|m| m.as_str()).unwrap_or("");
        let (name, extends) = match EXTENDS_CLAUSE.captures(rest) {
            Some(ext) => (strip_quotes(&ext[1]), Some(strip_quotes(&ext[2]))),
            None => (strip_quotes(rest), None),
        };
        trace!(keyword = %keyword, id, name = %name, "numbered header");
        return RegionHeader {
            region: keyword.clone(),
            id: Some(id),
            name: Some(name),
            object_type: keyword,
            extends,
            shape: HeaderShape::Numbered,
        };
    }

    if let Some(caps) = PARAMETERIZED_HEADER.captures(line) {
        let keyword = caps[1].to_ascii_lowercase();
        let name = strip_quotes(&caps[2]);
        trace!(keyword = %keyword, name = %name, "parameterized header");
        return RegionHeader {
            region: keyword,
            id: Some(0),
            name: Some(name),
            object_type: String::new(),
            extends: None,
            shape: HeaderShape::Parameterized,
        };
    }

    let shape = if BARE_KEYWORD.is_match(line) {
        HeaderShape::Bare
    } else {
        HeaderShape::Unrecognized
    };
    trace!(line = %line, ?shape, "fallback header");
    RegionHeader::fallback(line, shape)
}

/// Remove every double quote and trim.
pub fn strip_quotes(text: &str) -> String {
    text.replace('"', "").trim().to_string()
}

/// Remove every apostrophe and trim.
pub fn strip_apostrophes(text: &str) -> String {
    text.replace('\'', "").trim().to_string()
}

/// Upper-case the first character, leave the rest alone.
pub fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
