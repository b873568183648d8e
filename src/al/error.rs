//! Hard errors at the parser's boundaries
//!
//! Only I/O, symbol lookup, configuration and output failures end up here. Anything
//! wrong with the AL text itself is reported as a
//! [`Diagnostic`](crate::al::ast::Diagnostic) instead.

use crate::al::formats::FormatError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlError {
    /// A source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No discovered object matches the requested type and id.
    #[error("{object_type} {id} not found")]
    ObjectNotFound { object_type: String, id: u32 },

    /// The object was found but carries neither symbol data nor a source file.
    #[error("{object_type} {id} has no symbol data")]
    MissingSymbolData { object_type: String, id: u32 },

    /// The source declares no object at all.
    #[error("no object declaration in {}", path.display())]
    NoObject { path: PathBuf },

    /// Symbol mode was requested but no collector is attached.
    #[error("symbol lookup requires an object collector")]
    NoCollector,

    /// Pre-compiled symbol metadata could not be decoded.
    #[error("malformed symbol metadata: {0}")]
    MalformedSymbol(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

pub type AlResult<T> = Result<T, AlError>;
