//! The object parser

use super::collector::{CollectorItem, ObjectCollector};
use super::loader::read_source;
use crate::al::ast::{Diagnostic, DiagnosticCode, Position, SymbolObject};
use crate::al::building::build_symbol;
use crate::al::config::AlConfig;
use crate::al::error::{AlError, AlResult};
use crate::al::matching::{RegionMatcher, DEFAULT_MAX_DEPTH};
use std::path::{Path, PathBuf};
use tracing::{debug, info_span, warn};

/// Where the object comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseMode {
    /// Read and parse a source file
    File(PathBuf),
    /// Parse source text already in memory
    Text(String),
    /// Look the object up through the attached collector
    Symbol(CollectorItem),
}

/// One parsed object and everything noticed while parsing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub object: SymbolObject,
    pub diagnostics: Vec<Diagnostic>,
}

impl Parsed {
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_warning_or_worse)
    }
}

/// Every object declared in one text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFile {
    pub objects: Vec<SymbolObject>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses AL objects from text, files or symbol metadata.
pub struct ObjectParser {
    max_depth: usize,
    collector: Option<Box<dyn ObjectCollector>>,
}

impl ObjectParser {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            collector: None,
        }
    }

    pub fn from_config(config: &AlConfig) -> Self {
        Self::new().with_max_depth(config.parser.max_depth)
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_collector(mut self, collector: impl ObjectCollector + 'static) -> Self {
        self.collector = Some(Box::new(collector));
        self
    }

    pub fn parse(&self, mode: ParseMode) -> AlResult<Parsed> {
        match mode {
            ParseMode::File(path) => self.parse_file(path),
            ParseMode::Text(text) => Ok(self.parse_text(&text)),
            ParseMode::Symbol(item) => self.parse_symbol(&item),
        }
    }

    pub fn parse_file(&self, path: impl AsRef<Path>) -> AlResult<Parsed> {
        let path = path.as_ref();
        let _span = info_span!("parse_file", path = %path.display()).entered();
        let text = read_source(path)?;
        Ok(self.parse_text(&text))
    }

    /// Parse the first object in `text`. Never fails; see [`Parsed::diagnostics`].
    pub fn parse_text(&self, text: &str) -> Parsed {
        let ParsedFile {
            objects,
            mut diagnostics,
        } = self.parse_objects(text);
        let mut objects = objects.into_iter();

        let object = match objects.next() {
            Some(object) => object,
            None => {
                warn!("no object declaration found");
                diagnostics.push(
                    Diagnostic::new(DiagnosticCode::NoObject, "no object declaration found")
                        .at(Position::default()),
                );
                SymbolObject::default()
            }
        };

        let extra = objects.count();
        if extra > 0 {
            diagnostics.push(Diagnostic::new(
                DiagnosticCode::ExtraObject,
                format!("{extra} more top-level region(s) after the first object ignored"),
            ));
        }

        Parsed {
            object,
            diagnostics,
        }
    }

    /// Parse every top-level object in `text`.
    pub fn parse_objects(&self, text: &str) -> ParsedFile {
        let output = RegionMatcher::new(text)
            .with_max_depth(self.max_depth)
            .run();
        let mut diagnostics = output.diagnostics;

        let objects: Vec<_> = output
            .regions
            .iter()
            .map(|region| {
                let object = build_symbol(region);
                if let SymbolObject::Unsupported(header) = &object {
                    if !header.object_type.is_empty() {
                        diagnostics.push(
                            Diagnostic::new(
                                DiagnosticCode::UnsupportedObject,
                                format!(
                                    "'{}' objects have no typed symbol; header only",
                                    header.object_type
                                ),
                            )
                            .at(Position::from_offset(text, region.offset)),
                        );
                    }
                }
                object
            })
            .collect();

        debug!(
            objects = objects.len(),
            diagnostics = diagnostics.len(),
            "parsed text"
        );
        ParsedFile {
            objects,
            diagnostics,
        }
    }

    /// Resolve an object through the attached collector.
    ///
    /// Symbol metadata is preferred; an item that only has a source path is parsed
    /// from that file.
    pub fn parse_symbol(&self, query: &CollectorItem) -> AlResult<Parsed> {
        let collector = self.collector.as_deref().ok_or(AlError::NoCollector)?;
        let items = collector.discover()?;
        let item = items
            .iter()
            .find(|item| item.matches(query))
            .ok_or_else(|| AlError::ObjectNotFound {
                object_type: query.object_type.clone(),
                id: query.id,
            })?;

        if let Some(data) = &item.symbol_data {
            debug!(id = item.id, object_type = %item.object_type, "resolving from symbol data");
            return Ok(Parsed {
                object: collector.resolve_symbol(data)?,
                diagnostics: Vec::new(),
            });
        }

        match &item.fs_path {
            Some(path) => self.parse_file(path),
            None => Err(AlError::MissingSymbolData {
                object_type: item.object_type.clone(),
                id: item.id,
            }),
        }
    }
}

impl Default for ObjectParser {
    fn default() -> Self {
        Self::new()
    }
}
