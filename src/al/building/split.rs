//! Splitting `;`-separated region names
//!
//! The classifier hands over the argument list of a `keyword(args)` header as one
//! string. Fields, parts and keys pack several values into it.

use crate::al::header::strip_quotes;

/// Page `field`/`part`: `Customer; Customer."No."` → (`Customer`, `Customer."No."`).
///
/// Splits on the first `;`. Without one, the source expression is empty.
pub fn split_source_expression(name: &str) -> (String, String) {
    match name.split_once(';') {
        Some((left, right)) => (left.trim().to_string(), right.trim().to_string()),
        None => (name.trim().to_string(), String::new()),
    }
}

/// The parts of a table field header `id; name; data type`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableFieldHeader {
    pub id: String,
    pub name: String,
    pub data_type: Option<String>,
}

/// Table `field`: `1; "No."; Code[20]` → id `1`, name `No.`, data type `Code[20]`.
pub fn split_table_field(name: &str) -> TableFieldHeader {
    let mut parts = name.splitn(3, ';');
    let id = parts.next().unwrap_or("").trim().to_string();
    let field_name = parts.next().map(strip_quotes).unwrap_or_default();
    let data_type = parts
        .next()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);
    TableFieldHeader {
        id,
        name: field_name,
        data_type,
    }
}

/// Table `key`: `Key1; "No.", Name` → (`Key1`, [`No.`, `Name`]).
pub fn split_key(name: &str) -> (String, Vec<String>) {
    match name.split_once(';') {
        Some((key_name, fields)) => {
            let field_names = fields
                .split(',')
                .map(strip_quotes)
                .filter(|f| !f.is_empty())
                .collect();
            (key_name.trim().to_string(), field_names)
        }
        None => (name.trim().to_string(), Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_expression_keeps_quotes() {
        let (name, expr) = split_source_expression("Customer; Customer.\"No.\"");
        assert_eq!(name, "Customer");
        assert_eq!(expr, "Customer.\"No.\"");
    }

    #[test]
    fn test_source_expression_without_semicolon() {
        assert_eq!(
            split_source_expression(" Lines "),
            ("Lines".to_string(), String::new())
        );
    }

    #[test]
    fn test_table_field() {
        let header = split_table_field("1;\"No.\"");
        assert_eq!(header.id, "1");
        assert_eq!(header.name, "No.");
        assert_eq!(header.data_type, None);

        let header = split_table_field("10; Amount; Decimal");
        assert_eq!(header.id, "10");
        assert_eq!(header.name, "Amount");
        assert_eq!(header.data_type.as_deref(), Some("Decimal"));
    }

    #[test]
    fn test_table_field_without_name() {
        let header = split_table_field("7");
        assert_eq!(header.id, "7");
        assert_eq!(header.name, "");
    }

    #[test]
    fn test_key() {
        let (name, fields) = split_key("Key1;\"No.,Name\"");
        assert_eq!(name, "Key1");
        assert_eq!(fields, vec!["No.", "Name"]);

        let (name, fields) = split_key("PK; No., \"Posting Date\"");
        assert_eq!(name, "PK");
        assert_eq!(fields, vec!["No.", "Posting Date"]);
    }
}
