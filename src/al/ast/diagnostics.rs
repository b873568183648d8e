//! Diagnostics for structural parse anomalies
//!
//! Parsing never fails on malformed input. Unbalanced braces, unrecognized headers
//! and unsupported object kinds are absorbed locally and reported here instead, so
//! callers and editors can still surface them.

use serde::Serialize;
use std::fmt;

/// Diagnostic severity levels matching LSP protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Information,
    Hint,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Error => write!(f, "error"),
            DiagnosticSeverity::Warning => write!(f, "warning"),
            DiagnosticSeverity::Information => write!(f, "info"),
            DiagnosticSeverity::Hint => write!(f, "hint"),
        }
    }
}

/// What went wrong. Each code has a fixed severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticCode {
    /// An opening brace without a matching close; closed at end of input
    UnbalancedBrace,
    /// Header line matched neither header form
    UnrecognizedHeader,
    /// Numbered header whose id does not fit a `u32`
    InvalidObjectId,
    /// Nesting deeper than the configured limit; children dropped
    DepthLimit,
    /// Object kind other than table or page
    UnsupportedObject,
    /// No brace-delimited region in the input at all
    NoObject,
    /// More than one top-level region where one object was expected
    ExtraObject,
}

impl DiagnosticCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::UnbalancedBrace => "unbalanced-brace",
            DiagnosticCode::UnrecognizedHeader => "unrecognized-header",
            DiagnosticCode::InvalidObjectId => "invalid-object-id",
            DiagnosticCode::DepthLimit => "depth-limit",
            DiagnosticCode::UnsupportedObject => "unsupported-object",
            DiagnosticCode::NoObject => "no-object",
            DiagnosticCode::ExtraObject => "extra-object",
        }
    }

    pub fn severity(&self) -> DiagnosticSeverity {
        match self {
            DiagnosticCode::UnbalancedBrace
            | DiagnosticCode::DepthLimit
            | DiagnosticCode::NoObject => DiagnosticSeverity::Warning,
            DiagnosticCode::UnrecognizedHeader | DiagnosticCode::InvalidObjectId => {
                DiagnosticSeverity::Hint
            }
            DiagnosticCode::UnsupportedObject | DiagnosticCode::ExtraObject => {
                DiagnosticSeverity::Information
            }
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Zero-based line/column position in the parsed text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Position of byte `offset` in `source`. Offsets past the end clamp to the end.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &source[..offset];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        Self {
            line,
            column: before[line_start..].chars().count(),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Structured diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub code: DiagnosticCode,
    pub message: String,
    pub position: Option<Position>,
}

impl Diagnostic {
    pub fn new(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity: code.severity(),
            code,
            message: message.into(),
            position: None,
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn is_warning_or_worse(&self) -> bool {
        matches!(
            self.severity,
            DiagnosticSeverity::Error | DiagnosticSeverity::Warning
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => write!(
                f,
                "{} [{}]: {} at {}",
                self.severity, self.code, self.message, position
            ),
            None => write!(f, "{} [{}]: {}", self.severity, self.code, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_from_offset() {
        let source = "table 1 \"X\"\n{\n  fields\n";
        assert_eq!(Position::from_offset(source, 0), Position::new(0, 0));
        assert_eq!(Position::from_offset(source, 12), Position::new(1, 0));
        assert_eq!(Position::from_offset(source, 16), Position::new(2, 2));
        assert_eq!(Position::from_offset(source, 999), Position::new(3, 0));
    }

    #[test]
    fn test_display_is_one_based() {
        let diagnostic = Diagnostic::new(DiagnosticCode::UnbalancedBrace, "no closing brace")
            .at(Position::new(4, 0));
        assert_eq!(
            diagnostic.to_string(),
            "warning [unbalanced-brace]: no closing brace at 5:1"
        );
    }

    #[test]
    fn test_codes_carry_fixed_severity() {
        assert!(Diagnostic::new(DiagnosticCode::DepthLimit, "").is_warning_or_worse());
        assert!(!Diagnostic::new(DiagnosticCode::UnsupportedObject, "").is_warning_or_worse());
        assert_eq!(
            DiagnosticCode::UnrecognizedHeader.severity(),
            DiagnosticSeverity::Hint
        );
    }
}
