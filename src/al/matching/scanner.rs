//! Balanced brace scanning
//!
//! A small state machine over the raw bytes. Braces only count in code: string
//! literals (`'…'`, with `''` as an escaped apostrophe), quoted identifiers (`"…"`),
//! line comments (`// …`) and block comments (`/* … */`) are skipped. Literals and
//! quoted identifiers never span lines in AL, so a newline ends them.

/// The first top-level block found in a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Text before the opening brace
    pub pre: &'a str,
    /// Text between the braces
    pub body: &'a str,
    /// Text after the closing brace; empty when unclosed
    pub post: &'a str,
    /// Offset of the opening brace, relative to the scanned text
    pub open: usize,
    /// Offset of the closing brace; `None` when the block runs to end of input
    pub close: Option<usize>,
}

impl Block<'_> {
    pub fn is_closed(&self) -> bool {
        self.close.is_some()
    }

    /// Offset of `body` relative to the scanned text.
    pub fn body_offset(&self) -> usize {
        self.open + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    Literal,
    QuotedIdentifier,
    LineComment,
    BlockComment,
}

/// Find the first brace block in `text`, depth-aware.
///
/// Closing braces seen before any opening brace are ignored. If the first opening
/// brace is never closed, the block extends to the end of `text` and `close` is
/// `None`.
pub fn find_block(text: &str) -> Option<Block<'_>> {
    let bytes = text.as_bytes();
    let mut state = State::Code;
    let mut depth = 0usize;
    let mut open = None;
    let mut i = 0;

    while i < bytes.len() {
        let byte = bytes[i];
        let next = bytes.get(i + 1).copied();
        match state {
            State::Code => match byte {
                b'\'' => state = State::Literal,
                b'"' => state = State::QuotedIdentifier,
                b'/' if next == Some(b'/') => {
                    state = State::LineComment;
                    i += 1;
                }
                b'/' if next == Some(b'*') => {
                    state = State::BlockComment;
                    i += 1;
                }
                b'{' => {
                    if depth == 0 {
                        open = Some(i);
                    }
                    depth += 1;
                }
                b'}' if depth > 0 => {
                    depth -= 1;
                    if depth == 0 {
                        if let Some(start) = open {
                            return Some(Block {
                                pre: &text[..start],
                                body: &text[start + 1..i],
                                post: &text[i + 1..],
                                open: start,
                                close: Some(i),
                            });
                        }
                    }
                }
                _ => {}
            },
            State::Literal => match byte {
                b'\'' if next == Some(b'\'') => i += 1,
                b'\'' | b'\n' => state = State::Code,
                _ => {}
            },
            State::QuotedIdentifier => {
                if byte == b'"' || byte == b'\n' {
                    state = State::Code;
                }
            }
            State::LineComment => {
                if byte == b'\n' {
                    state = State::Code;
                }
            }
            State::BlockComment => {
                if byte == b'*' && next == Some(b'/') {
                    state = State::Code;
                    i += 1;
                }
            }
        }
        i += 1;
    }

    open.map(|start| Block {
        pre: &text[..start],
        body: &text[start + 1..],
        post: "",
        open: start,
        close: None,
    })
}
