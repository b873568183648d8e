//! Output formats for symbol objects

pub mod json;
pub mod registry;
pub mod treeviz;

pub use json::{JsonFormatter, YamlFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
