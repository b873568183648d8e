//! Main module for AL object parsing

pub mod ast;
pub mod building;
pub mod config;
pub mod error;
pub mod formats;
pub mod header;
pub mod matching;
pub mod pipeline;
pub mod summary;
pub mod testing;
