//! Shared building blocks for the quote service crates.
//!
//! Keeps logging setup and tiny wire types in one place so the server and
//! the binary entry point agree on formats.

pub mod types;
pub mod utils;
