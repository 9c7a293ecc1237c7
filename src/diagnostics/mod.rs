//! User-facing diagnostics.
//!
//! Turns positioned errors into rendered reports: the offending source line
//! with a caret under the byte offset, the error name, its message and an
//! optional tip. Line and column are computed on demand from the source.

pub mod diagnostics;
