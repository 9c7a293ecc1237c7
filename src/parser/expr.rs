use tracing::trace;

use crate::{
    ast::{
        ast::Program,
        variable::{Variable, VariableReference},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    types::{
        actions::Action,
        kinds::{ValueKind, DEFAULT_FLOAT_KIND, DEFAULT_INTEGER_KIND},
        value::Value,
    },
    Position,
};

/// Tokens allowed between `=` and `;` of a declaration.
pub const CALCULABLE: [TokenKind; 4] = [
    TokenKind::String,
    TokenKind::Number,
    TokenKind::Identifier,
    TokenKind::As,
];

/// Kind of a literal token, read from its spelling.
pub fn infer_token_kind(token: &Token) -> Result<ValueKind, Error> {
    match token.kind {
        TokenKind::String => Ok(ValueKind::String),
        TokenKind::Number => Ok(infer_numeric_text(&token.value)),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: token.value.clone(),
                message: String::from("unable to infer a type for this token"),
            },
            token.span.start.clone(),
        )),
    }
}

/// Kind of an already computed value.
///
/// Numbers go by their printed form, so `5.0` stays a float and `5` an integer.
pub fn infer_literal_kind(value: &Value) -> ValueKind {
    match value {
        Value::Integer(_) | Value::Float(_) => infer_numeric_text(&value.to_string()),
        Value::Bool(_) => ValueKind::Bool,
        Value::String(_) => ValueKind::String,
        Value::Object(_) => ValueKind::Object,
    }
}

fn infer_numeric_text(text: &str) -> ValueKind {
    if text.contains('.') {
        DEFAULT_FLOAT_KIND
    } else {
        DEFAULT_INTEGER_KIND
    }
}

/// Builds the unnamed variable a literal token stands for.
pub fn create_anonymous_variable(token: &Token) -> Result<Variable, Error> {
    let kind = infer_token_kind(token)?;
    let value = match kind {
        ValueKind::String => Ok(Value::String(token.value.clone())),
        _ => Value::from_numeric_literal(&token.value),
    };

    value
        .and_then(|value| Variable::anonymous(kind, value))
        .map_err(|error| Error::new(error, token.span.start.clone()))
}

enum Calculable<'a> {
    Literal(Variable),
    Identifier(&'a Token),
}

enum Reduced {
    Value(Variable),
    Reference(VariableReference),
}

/// Reduces a declaration's value tokens to a single variable.
///
/// Every identifier that names an action of the literal before it is an
/// operator occurrence. Each occurrence is applied once, to its own
/// neighbours as they were written, so `2 + 3 + 4` leaves two results
/// behind instead of folding left to right. The literal after an
/// occurrence is its argument; anything else there is dropped unread.
/// Every other identifier must name a declared variable, and what remains
/// must be exactly one element.
///
/// `start` positions errors that have no token of their own.
pub fn reduce_expression(
    window: &[Token],
    program: &Program,
    start: Position,
) -> Result<Variable, Error> {
    trace!(
        "reducing [{}]",
        window.iter().map(|t| t.value.as_str()).collect::<Vec<_>>().join(" ")
    );

    let calculables = window
        .iter()
        .map(|token| match token.kind {
            TokenKind::Identifier => Ok(Calculable::Identifier(token)),
            _ => create_anonymous_variable(token).map(Calculable::Literal),
        })
        .collect::<Result<Vec<_>, Error>>()?;

    // Only literals take part in an action, names never do
    let operands = calculables
        .iter()
        .map(|calculable| match calculable {
            Calculable::Literal(variable) => Some(variable),
            Calculable::Identifier(_) => None,
        })
        .collect::<Vec<Option<&Variable>>>();

    let occurrences = calculables
        .iter()
        .enumerate()
        .map(|(i, calculable)| match calculable {
            Calculable::Identifier(token) if i > 0 => {
                operands[i - 1].and_then(|receiver| receiver.action_for_symbol(&token.value))
            }
            _ => None,
        })
        .collect::<Vec<Option<&'static Action>>>();

    let mut reduced = vec![];
    for (i, calculable) in calculables.iter().enumerate() {
        let position = window[i].span.start.clone();

        let receiver = i.checked_sub(1).and_then(|p| operands[p]);
        if let (Some(action), Some(receiver)) = (occurrences[i], receiver) {
            let arguments = operands
                .get(i + 1)
                .copied()
                .flatten()
                .into_iter()
                .collect::<Vec<_>>();
            let result = receiver
                .invoke(action, &arguments)
                .and_then(|value| Variable::anonymous(receiver.kind(), value))
                .map_err(|error| Error::new(error, position))?;

            trace!("{} {} -> {:?}", receiver.kind(), action.name, result.value());
            reduced.push(Reduced::Value(result));
            continue;
        }

        let is_successor = i > 0 && occurrences[i - 1].is_some();
        let is_predecessor = occurrences.get(i + 1).is_some_and(Option::is_some);

        if is_successor || is_predecessor {
            continue;
        }

        match calculable {
            Calculable::Literal(variable) => reduced.push(Reduced::Value(variable.clone())),
            Calculable::Identifier(token) => {
                let reference = VariableReference::new(token.value.clone(), program)
                    .map_err(|error| Error::new(error, position))?;
                reduced.push(Reduced::Reference(reference));
            }
        }
    }

    match reduced.as_slice() {
        [] => Err(Error::new(ErrorImpl::EmptyExpression, start)),
        [Reduced::Value(variable)] => Ok(variable.clone()),
        [Reduced::Reference(reference)] => reference
            .resolve(program)
            .cloned()
            .map_err(|error| Error::new(error, start)),
        remaining => Err(Error::new(
            ErrorImpl::IrreducibleExpression {
                remaining: remaining.len(),
            },
            start,
        )),
    }
}
