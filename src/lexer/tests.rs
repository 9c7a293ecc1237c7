//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and floats)
//! - String literals
//! - Structural symbols and operator characters
//! - Comments
//! - Error cases

use crate::errors::errors::{ErrorCategory, ErrorImpl};

use super::{lexer::tokenize, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.wi".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "let as ".to_string();
    let tokens = tokenize(source, Some("test.wi".to_string())).unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::As);
}

#[test]
fn test_keywords_only_match_whole_words() {
    let source = "letter assert lets ".to_string();
    let tokens = tokenize(source, Some("test.wi".to_string())).unwrap();

    assert!(tokens.iter().all(|token| token.kind == TokenKind::Identifier));
    assert_eq!(tokens[0].value, "letter");
    assert_eq!(tokens[1].value, "assert");
    assert_eq!(tokens[2].value, "lets");
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase i8".to_string();
    let tokens = tokenize(source, Some("test.wi".to_string())).unwrap();

    let values = tokens.iter().map(|token| token.value.as_str()).collect::<Vec<_>>();
    assert_eq!(values, vec!["foo", "bar", "baz_123", "_underscore", "CamelCase", "i8"]);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Identifier));
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 100.5;".to_string();
    let tokens = tokenize(source, Some("test.wi".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].value, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
}

#[test]
fn test_number_at_end_of_file_is_an_error() {
    let error = tokenize("let x = 12".to_string(), None).unwrap_err();

    assert_eq!(error.get_error(), &ErrorImpl::UnterminatedNumber { token: "12".to_string() });
    assert_eq!(error.get_category(), ErrorCategory::Lex);
    assert_eq!(error.get_position().0, 8);
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "world" "multiple words" "no \n escapes""#.to_string();
    let tokens = tokenize(source, Some("test.wi".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "world");
    assert_eq!(tokens[2].value, "multiple words");
    assert_eq!(tokens[3].value, "no \\n escapes");
}

#[test]
fn test_unterminated_string_is_an_error() {
    let error = tokenize(r#"let s = "abc"#.to_string(), None).unwrap_err();

    assert_eq!(error.get_error(), &ErrorImpl::UnterminatedString);
    assert_eq!(error.get_category(), ErrorCategory::Lex);
    assert_eq!(error.get_position().0, 8);
}

#[test]
fn test_tokenize_structural_symbols() {
    assert_eq!(
        kinds("( ) { } = ; ,"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Assignment,
            TokenKind::Semicolon,
            TokenKind::Comma,
        ]
    );
}

#[test]
fn test_operators_are_identifiers() {
    let source = "+ - * / .".to_string();
    let tokens = tokenize(source, Some("test.wi".to_string())).unwrap();

    assert_eq!(tokens.len(), 5);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Identifier));
    let values = tokens.iter().map(|token| token.value.as_str()).collect::<Vec<_>>();
    assert_eq!(values, vec!["+", "-", "*", "/", "."]);
}

#[test]
fn test_operator_between_numbers() {
    let tokens = tokenize("5+3;".to_string(), None).unwrap();

    assert_eq!(tokens[0].value, "5");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "+");
    assert_eq!(tokens[2].value, "3");
}

#[test]
fn test_line_comment_is_skipped() {
    let with_comment = tokenize("// comment\nlet x = 1;".to_string(), None).unwrap();
    let without = tokenize("let x = 1;".to_string(), None).unwrap();

    let strip = |tokens: &[super::tokens::Token]| {
        tokens
            .iter()
            .map(|token| (token.kind, token.value.clone()))
            .collect::<Vec<_>>()
    };
    assert_eq!(strip(&with_comment), strip(&without));
    assert_eq!(with_comment[0].offset(), 11);
}

#[test]
fn test_block_comment_is_skipped() {
    assert_eq!(
        kinds("let /* a\nmultiline * comment */ x = 1;"),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_unterminated_block_comment_is_an_error() {
    let error = tokenize("let x = 1; /* never closed".to_string(), None).unwrap_err();

    assert_eq!(error.get_error(), &ErrorImpl::UnterminatedComment);
    assert_eq!(error.get_position().0, 11);
}

#[test]
fn test_offsets() {
    let tokens = tokenize("let  x =\n 1;".to_string(), None).unwrap();

    let offsets = tokens.iter().map(|token| token.offset()).collect::<Vec<_>>();
    assert_eq!(offsets, vec![0, 5, 7, 10, 11]);
    assert_eq!(tokens[3].span.end.0, 11);
}

#[test]
fn test_unrecognised_token() {
    let error = tokenize("let a = #;".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 8);
}

#[test]
fn test_empty_source() {
    assert!(tokenize(String::new(), None).unwrap().is_empty());
    assert!(tokenize("  \n\t// only a comment".to_string(), None).unwrap().is_empty());
}
