#![allow(clippy::module_inception)]

use std::rc::Rc;

use serde::Serialize;

use crate::{ast::ast::Program, errors::errors::Error, lexer::lexer::tokenize, parser::parser::parse};

pub mod ast;
pub mod diagnostics;
pub mod dump;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod types;

extern crate regex;

/// Byte offset into a source file, plus the file's name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes and parses `source` in one go.
pub fn front_end(source: &str, file: Option<String>) -> Result<Program, Error> {
    let file_name = Rc::new(file.clone().unwrap_or_else(|| String::from("shell")));
    let tokens = tokenize(source.to_string(), file)?;
    parse(tokens, source, file_name)
}
