//! Type and value model.
//!
//! This module defines the fixed set of value kinds the language knows:
//!
//! - Kind tags with their bound intervals and validity predicates
//! - Dynamically typed values as they come out of literals and actions
//! - Action tables (add, subtract, multiply, divide, get) per kind
//! - The operator registry shared with the lexer
//!
//! Kinds are a closed enum. Integer and float kinds share their checks
//! through helper functions rather than a hierarchy.

pub mod actions;
pub mod kinds;
pub mod value;
