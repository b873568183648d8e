//! The recursive region matcher

use super::properties::parse_properties;
use super::scanner::{find_block, Block};
use crate::al::ast::{Diagnostic, DiagnosticCode, ObjectRegion, Position};
use crate::al::header::{classify, HeaderShape};
use tracing::{debug, warn};

/// Nesting deeper than this stops descending. Real objects rarely pass 8.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Regions found in one text, plus what went wrong along the way.
#[derive(Debug, Clone, Default)]
pub struct MatchOutput {
    pub regions: Vec<ObjectRegion>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Matches brace regions over one source text.
///
/// Recursion goes as deep as the source nests (bounded by `max_depth`); siblings are
/// walked iteratively.
pub struct RegionMatcher<'a> {
    source: &'a str,
    max_depth: usize,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> RegionMatcher<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            max_depth: DEFAULT_MAX_DEPTH,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    pub fn run(mut self) -> MatchOutput {
        let regions = self.match_siblings(self.source, 0, 0);
        MatchOutput {
            regions,
            diagnostics: self.diagnostics,
        }
    }

    /// Every top-level region in `text`. `base` is the offset of `text` in the source.
    fn match_siblings(&mut self, text: &'a str, base: usize, depth: usize) -> Vec<ObjectRegion> {
        let mut regions = Vec::new();
        let mut rest = text;
        let mut base = base;

        while let Some(block) = find_block(rest) {
            regions.extend(self.match_block(&block, base, depth));
            match block.close {
                Some(close) => {
                    base += close + 1;
                    rest = block.post;
                }
                None => break,
            }
        }

        regions
    }

    /// `None` when the block never closes and holds no balanced region: the parse is
    /// truncated before it. An unclosed root is kept header-only so the object survives.
    fn match_block(&mut self, block: &Block<'a>, base: usize, depth: usize) -> Option<ObjectRegion> {
        let header_line = last_non_empty_line(block.pre);
        let header = classify(header_line);
        let open = base + block.open;

        match header.shape {
            HeaderShape::Unrecognized => {
                let message = if header_line.is_empty() {
                    "region has no header line".to_string()
                } else {
                    format!("unrecognized region header '{}'", header_line)
                };
                self.report(DiagnosticCode::UnrecognizedHeader, message, open);
            }
            HeaderShape::InvalidId => {
                self.report(
                    DiagnosticCode::InvalidObjectId,
                    format!("object id out of range in '{}'", header_line),
                    open,
                );
            }
            _ => {}
        }

        if !block.is_closed() {
            warn!(region = %header.region, offset = open, "unclosed brace, closing at end of input");
            self.report(
                DiagnosticCode::UnbalancedBrace,
                format!("'{}' is never closed; closed at end of input", header.region),
                open,
            );
        }

        let nested = find_block(block.body);
        let property_text = match nested {
            Some(first) if header.region != "field" || !block.is_closed() => first.pre,
            Some(_) => block.body,
            None if block.is_closed() => block.body,
            None => "",
        };
        let properties = parse_properties(property_text);

        let children = match nested {
            Some(_) if depth + 1 >= self.max_depth => {
                warn!(region = %header.region, depth, "nesting limit reached");
                self.report(
                    DiagnosticCode::DepthLimit,
                    format!(
                        "'{}' nests deeper than {} levels; children dropped",
                        header.region, self.max_depth
                    ),
                    open,
                );
                Vec::new()
            }
            Some(_) => self.match_siblings(block.body, base + block.body_offset(), depth + 1),
            None => Vec::new(),
        };

        if !block.is_closed() && children.is_empty() && depth > 0 {
            debug!(region = %header.region, depth, "dropped unclosed region");
            return None;
        }

        debug!(
            region = %header.region,
            depth,
            properties = properties.len(),
            children = children.len(),
            "matched region"
        );

        Some(ObjectRegion {
            region: header.region,
            id: header.id,
            name: header.name,
            object_type: header.object_type,
            extends: header.extends,
            source: header_line.to_string(),
            offset: open,
            properties,
            children,
        })
    }

    fn report(&mut self, code: DiagnosticCode, message: String, offset: usize) {
        let position = Position::from_offset(self.source, offset);
        self.diagnostics.push(Diagnostic::new(code, message).at(position));
    }
}

/// Match every region in `source` with the default depth limit.
pub fn match_regions(source: &str) -> MatchOutput {
    RegionMatcher::new(source).run()
}

fn last_non_empty_line(text: &str) -> &str {
    text.lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}
