//! Source file loading

use crate::al::error::{AlError, AlResult};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read an AL source file, dropping a leading byte order mark.
pub fn read_source(path: impl AsRef<Path>) -> AlResult<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| AlError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read source");
    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}
