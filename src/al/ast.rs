//! Parse nodes and typed symbol objects
//!
//! Two families of types live here:
//!
//! - [`ObjectRegion`] / [`Property`]: the transient, generic region tree produced by
//!   the matcher. Discarded once converted.
//! - [`SymbolObject`] and its controls: the typed output handed to callers.
//!
//! Diagnostics collected along the way are in [`diagnostics`].

pub mod diagnostics;
pub mod region;
pub mod symbols;

pub use diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSeverity, Position};
pub use region::{ObjectRegion, Property};
pub use symbols::{
    Control, FieldControl, KeyControl, ObjectHeader, Page, PageControl, ParentSnapshot,
    SymbolObject, Table,
};
