//! Caption resolution

use crate::al::ast::Property;
use crate::al::header::{strip_apostrophes, strip_quotes};
use once_cell::sync::Lazy;
use regex::Regex;

static NEXT_LANGUAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*[A-Za-z]{3}=").unwrap());

/// Display caption for a control.
///
/// `Caption` wins, then the first language of `CaptionML`, then the name without
/// double quotes.
pub fn resolve_caption(properties: &[Property], name: &str) -> String {
    if let Some(caption) = find(properties, "Caption") {
        return caption_text(&caption.value);
    }
    if let Some(caption) = find(properties, "CaptionML") {
        return caption_ml_text(&caption.value);
    }
    strip_quotes(name)
}

fn find<'a>(properties: &'a [Property], name: &str) -> Option<&'a Property> {
    properties.iter().find(|p| p.name == name)
}

/// `'Customer No.', Comment = 'x'` → `Customer No.`; unquoted values lose apostrophes.
fn caption_text(value: &str) -> String {
    first_literal(value).unwrap_or_else(|| strip_apostrophes(value))
}

/// `ENU=Customer No.,DEU=Kundennr.` → `Customer No.`
fn caption_ml_text(value: &str) -> String {
    let value = strip_apostrophes(value);
    let text = value.split_once('=').map(|(_, text)| text).unwrap_or(&value);
    let text = match NEXT_LANGUAGE.find(text) {
        Some(m) => &text[..m.start()],
        None => text,
    };
    text.trim().to_string()
}

/// Contents of a leading `'…'` literal, with `''` unescaped.
fn first_literal(value: &str) -> Option<String> {
    let mut chars = value.trim_start().strip_prefix('\'')?.chars().peekable();
    let mut out = String::new();
    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.peek() == Some(&'\'') {
                chars.next();
                out.push('\'');
            } else {
                return Some(out.trim().to_string());
            }
        } else {
            out.push(c);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> Vec<Property> {
        pairs.iter().map(|(n, v)| Property::new(*n, *v)).collect()
    }

    #[test]
    fn test_caption_property_wins() {
        let properties = props(&[("Caption", "'Customer No.'")]);
        assert_eq!(resolve_caption(&properties, "CustNo"), "Customer No.");
    }

    #[test]
    fn test_caption_with_comment_keeps_first_literal() {
        let properties = props(&[("Caption", "'Amount', Comment = 'In LCY'")]);
        assert_eq!(resolve_caption(&properties, "Amount"), "Amount");

        let properties = props(&[("Caption", "'Customer''s Name'")]);
        assert_eq!(resolve_caption(&properties, "Name"), "Customer's Name");
    }

    #[test]
    fn test_caption_ml_drops_language_tag() {
        let properties = props(&[("CaptionML", "ENU=Customer No.,DEU=Kundennr.")]);
        assert_eq!(resolve_caption(&properties, "No."), "Customer No.");

        let properties = props(&[("CaptionML", "ENU='Ship-to Code'")]);
        assert_eq!(resolve_caption(&properties, "x"), "Ship-to Code");
    }

    #[test]
    fn test_falls_back_to_unquoted_name() {
        assert_eq!(resolve_caption(&[], "\"No.\""), "No.");
        assert_eq!(resolve_caption(&[], "General"), "General");
        assert_eq!(resolve_caption(&[], ""), "");
    }
}
