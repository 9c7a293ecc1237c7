use std::collections::HashMap;

use crate::{ast::ast::Node, errors::errors::Error, lexer::tokens::TokenKind};

use super::{
    parser::Parser,
    stmt::{parse_call, parse_declaration},
};

pub type NodeHandler = fn(&mut Parser) -> Result<Node, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    parser.node(TokenKind::Let, parse_declaration);
    parser.node(TokenKind::Identifier, parse_call);
}

// Lookup table inside parser struct, so it's easier
pub type NodeLookup = HashMap<TokenKind, NodeHandler>;
