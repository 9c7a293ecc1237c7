use tracing::debug;

use crate::{
    ast::{
        ast::Node,
        call::{Argument, FunctionCall},
        variable::{Variable, VariableReference},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    types::kinds::ValueKind,
};

use super::{
    expr::{create_anonymous_variable, infer_literal_kind, reduce_expression, CALCULABLE},
    parser::Parser,
};

/// `let <name> = <value tokens> [as <type>];`
pub fn parse_declaration(parser: &mut Parser) -> Result<Node, Error> {
    parser.expect(TokenKind::Let)?;

    let error = match parser.peek(0) {
        Some(token) => Some(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: token.value.clone(),
                message: String::from("expected identifier during variable declaration"),
            },
            parser.get_position(),
        )),
        None => None,
    };
    let variable_name = parser.expect_error(TokenKind::Identifier, error)?;
    parser.expect(TokenKind::Assignment)?;

    let value_start = parser.get_position();
    let mut window = vec![];
    while parser.current_token(&TokenKind::Semicolon.to_string())?.kind != TokenKind::Semicolon {
        let token = parser.advance(&TokenKind::Semicolon.to_string())?;
        if !token.is_one_of_many(&CALCULABLE) {
            return Err(Error::new(
                ErrorImpl::IncalculableToken { token: token.value },
                token.span.start,
            ));
        }
        window.push(token);
    }

    let explicit_kind = parse_type_descriptor(&variable_name, &window)?;
    if explicit_kind.is_some() {
        window.truncate(window.len() - 2);
    }

    if let Some(token) = window.iter().find(|token| token.kind == TokenKind::As) {
        return Err(Error::new(
            ErrorImpl::UnexpectedTypeDescriptor,
            token.span.start.clone(),
        ));
    }

    let reduced = reduce_expression(&window, parser.program(), value_start.clone())?;
    let value = reduced
        .value()
        .cloned()
        .ok_or_else(|| Error::new(ErrorImpl::EmptyExpression, value_start.clone()))?;
    let kind = explicit_kind.unwrap_or_else(|| infer_literal_kind(&value));

    parser.ensure_unique(&variable_name.value, variable_name.span.start.clone())?;
    parser.expect(TokenKind::Semicolon)?;

    let variable = Variable::new(kind)
        .set_name(variable_name.value.clone())
        .and_then(|variable| variable.set_value(value))
        .map_err(|error| Error::new(error, value_start))?;

    debug!("declared {} as {}", variable_name.value, kind);
    Ok(Node::Variable(variable))
}

/// Splits a trailing `as <type>` off the value tokens, if present.
fn parse_type_descriptor(
    variable_name: &Token,
    window: &[Token],
) -> Result<Option<ValueKind>, Error> {
    let [.., descriptor, type_name] = window else {
        return Ok(None);
    };

    if descriptor.kind != TokenKind::As {
        return Ok(None);
    }

    if type_name.kind != TokenKind::Identifier {
        return Err(Error::new(
            ErrorImpl::InvalidTypeDescriptor {
                variable: variable_name.value.clone(),
            },
            type_name.span.start.clone(),
        ));
    }

    ValueKind::from_name(&type_name.value).map(Some).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnknownType {
                type_: type_name.value.clone(),
            },
            type_name.span.start.clone(),
        )
    })
}

/// `<name>( [argument [,]]* ) [;]`
pub fn parse_call(parser: &mut Parser) -> Result<Node, Error> {
    if parser.peek(1).map(|token| token.kind) != Some(TokenKind::OpenParen) {
        let token = parser.current_token("call")?;
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        ));
    }

    let function_name = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::OpenParen)?;

    let mut arguments = vec![];
    loop {
        let token = parser.advance(&TokenKind::CloseParen.to_string())?;
        if token.kind == TokenKind::CloseParen {
            break;
        }

        if !token.is_one_of_many(&[TokenKind::Identifier, TokenKind::String, TokenKind::Number]) {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.value,
                    message: String::from("expected an argument or `)`"),
                },
                token.span.start,
            ));
        }

        arguments.push(parse_argument(parser, &token)?);

        if parser.current_token_kind() == Some(TokenKind::Comma) {
            parser.advance(&TokenKind::Comma.to_string())?;
        }
    }

    parser.ensure_unique(&function_name.value, function_name.span.start.clone())?;
    if parser.current_token_kind() == Some(TokenKind::Semicolon) {
        parser.advance(&TokenKind::Semicolon.to_string())?;
    }

    let call = FunctionCall::new()
        .set_arguments(arguments)
        .set_function_name(function_name.value.clone())
        .map_err(|error| Error::new(error, function_name.span.start.clone()))?;

    debug!(
        "call to {} with {} arguments",
        function_name.value,
        call.arguments().len()
    );
    Ok(Node::Call(call))
}

fn parse_argument(parser: &Parser, token: &Token) -> Result<Argument, Error> {
    match token.kind {
        TokenKind::Identifier => VariableReference::new(token.value.clone(), parser.program())
            .map(Argument::Reference)
            .map_err(|error| Error::new(error, token.span.start.clone())),
        _ => create_anonymous_variable(token).map(Argument::Literal),
    }
}
