//! Parser module for building the program tree.
//!
//! This module contains the parser that transforms a stream of tokens into
//! a flat program body. It handles:
//!
//! - Variable declarations with optional `as <type>` descriptors
//! - Function calls with literal and by-name arguments
//! - Reduction of a declaration's value tokens to one value
//! - Scope checks against everything parsed before
//!
//! Top-level nodes are dispatched on their first token through a lookup
//! table. Parsing stops at the first error.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
