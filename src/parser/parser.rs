//! Parser implementation for building the program tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! Top-level nodes are dispatched through a lookup table keyed by the kind
//! of their first token. The program built so far lives on the parser and
//! is lent out read-only whenever a name has to be resolved.

use std::{collections::HashMap, rc::Rc};

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::lookups::{create_token_lookups, NodeHandler, NodeLookup};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Byte length of the source, used to place end-of-file errors
    source_length: u32,
    /// Lookup table for top-level node handlers
    node_lookup: NodeLookup,
    /// Nodes parsed so far
    program: Program,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, source: &str, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
            source_length: source.len() as u32,
            node_lookup: HashMap::new(),
            program: Program::new(),
        }
    }

    /// Returns the current token, or an end-of-file error naming `expected`.
    pub fn current_token(&self, expected: &str) -> Result<&Token, Error> {
        self.tokens
            .get(self.pos)
            .ok_or_else(|| self.end_of_file(expected))
    }

    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.peek(0).map(|token| token.kind)
    }

    /// Looks `offset` tokens ahead without advancing.
    pub fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self, expected: &str) -> Result<Token, Error> {
        let token = self.current_token(expected)?.clone();
        self.pos += 1;
        Ok(token)
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token(&expected_kind.to_string())?;
        if token.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: token.value.clone(),
                        message: format!("expected {}", expected_kind),
                    },
                    token.span.start.clone(),
                )),
            }
        } else {
            self.advance(&expected_kind.to_string())
        }
    }

    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    pub fn get_node_lookup(&self) -> &NodeLookup {
        &self.node_lookup
    }

    /// Registers a top-level node handler for a token.
    pub fn node(&mut self, kind: TokenKind, node_fn: NodeHandler) {
        self.node_lookup.insert(kind, node_fn);
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Fails if `name` is already taken anywhere in the program.
    pub fn ensure_unique(&self, name: &str, position: Position) -> Result<(), Error> {
        if self.program.contains_name(name) {
            return Err(Error::new(
                ErrorImpl::NameAlreadyDeclared {
                    name: name.to_string(),
                },
                position,
            ));
        }

        Ok(())
    }

    /// Returns the position of the current token, or of the end of the source.
    pub fn get_position(&self) -> Position {
        match self.peek(0) {
            Some(token) => token.span.start.clone(),
            None => Position(self.source_length, Rc::clone(&self.file)),
        }
    }

    fn end_of_file(&self, expected: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedEndOfFile {
                expected: expected.to_string(),
            },
            Position(self.source_length, Rc::clone(&self.file)),
        )
    }
}

/// Parses a stream of tokens into a program.
///
/// `source` is only used to place errors that happen at the end of input.
pub fn parse(tokens: Vec<Token>, source: &str, file: Rc<String>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens, source, file);
    create_token_lookups(&mut parser);

    while parser.has_tokens() {
        let token = parser.current_token("node")?;
        let handler = match parser.get_node_lookup().get(&token.kind) {
            Some(handler) => *handler,
            None => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                ))
            }
        };

        let node = handler(&mut parser)?;
        parser.program.push(node);
    }

    debug!("parsed {} with {} nodes", parser.file, parser.program.len());
    Ok(parser.program)
}
