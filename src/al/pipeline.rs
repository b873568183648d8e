//! Parse entry points
//!
//! [`ObjectParser`] ties the stages together and is the only place that talks to the
//! outside world: source files through [`loader`], pre-compiled symbols through an
//! [`ObjectCollector`]. Text-level problems never fail a parse; only those two
//! boundaries return errors.

pub mod collector;
pub mod loader;
pub mod parser;

pub use collector::{CollectorItem, ObjectCollector, SymbolData};
pub use loader::read_source;
pub use parser::{ObjectParser, ParseMode, Parsed, ParsedFile};
