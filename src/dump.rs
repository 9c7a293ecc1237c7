//! JSON debug artifacts for the token stream and the program tree.

use std::{fs, path::Path};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::{ast::ast::Program, lexer::tokens::Token};

pub const TOKENS_DUMP_PATH: &str = ".tokens.json";
pub const TREE_DUMP_PATH: &str = ".tree.json";

#[derive(Error, Debug)]
pub enum DumpError {
    #[error("failed to write dump: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialise dump: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn write_tokens(tokens: &[Token], path: impl AsRef<Path>) -> Result<(), DumpError> {
    write_json(tokens, path.as_ref())
}

pub fn write_tree(program: &Program, path: impl AsRef<Path>) -> Result<(), DumpError> {
    write_json(program, path.as_ref())
}

fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), DumpError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;

    debug!("wrote {}", path.display());
    Ok(())
}
