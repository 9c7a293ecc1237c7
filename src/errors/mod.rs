//! Error types and error handling for the front end.
//!
//! This module defines the error types raised while turning source text
//! into a program tree. It includes:
//!
//! - A positioned error structure pointing back into the source
//! - Specific error variants for lexing, parsing and value validation
//! - Error names, categories and suggestions used by diagnostics

pub mod errors;
