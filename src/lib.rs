//! # aldesign
//!
//! A structural parser for AL object definitions.
//!
//! AL sources declare business objects (`table`, `page`, …) as brace-delimited
//! regions. This crate recovers that nesting without a full grammar and turns it
//! into a typed symbol tree that a design surface can render.
//!
//! The work happens in three stages, each consuming the output of the previous one:
//!
//! src/al
//!   ├── matching    raw text → generic region tree
//!   ├── header      region header line → keyword, id, name
//!   └── building    region tree → typed `SymbolObject`
//!
//! Entry points live in [`al::pipeline`]; output formats in [`al::formats`].

#![allow(rustdoc::invalid_html_tags)]

pub mod al;

pub use al::pipeline::{ObjectParser, ParseMode, Parsed};
