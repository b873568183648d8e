//! Symbol tree building
//!
//! Turns a root [`ObjectRegion`](crate::al::ast::ObjectRegion) into a typed
//! [`SymbolObject`](crate::al::ast::SymbolObject). The object keyword picks the
//! variant; each variant has its own rules for how child regions become controls:
//!
//! - [`table`]: `fields` and `keys` regions only, headers split on `;`
//! - [`page`]: every region, `actions` apart, with two-column layout flags
//!
//! The pieces both share (header splitting, captions, layout arithmetic) are pure
//! functions in their own modules.

pub mod builder;
pub mod captions;
pub mod layout;
pub mod page;
pub mod split;
pub mod table;

pub use builder::{build_symbol, object_header, ObjectKind};
pub use captions::resolve_caption;
pub use layout::{separator_flags, starts_second_column};
pub use split::{split_key, split_source_expression, split_table_field, TableFieldHeader};
