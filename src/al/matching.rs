//! Region Matching
//!
//! Recovers the nesting of an AL source from its braces alone. There is no lexer and
//! no grammar; the matcher:
//!
//! 1. finds the first balanced `{ … }` block ([`scanner`])
//! 2. classifies the last non-empty line before it as the region header
//!    ([`crate::al::header`])
//! 3. reads `Name = Value;` lines into properties ([`properties`])
//! 4. descends into the block body for child regions, then moves on to the text
//!    after the block for siblings
//!
//! The result is a generic [`ObjectRegion`](crate::al::ast::ObjectRegion) tree.
//! Malformed input never fails: problems are recorded as diagnostics.

pub mod matcher;
pub mod properties;
pub mod scanner;

pub use matcher::{match_regions, MatchOutput, RegionMatcher, DEFAULT_MAX_DEPTH};
pub use properties::{parse_properties, parse_property_line};
pub use scanner::{find_block, Block};
