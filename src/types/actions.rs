//! Named actions a kind supports, and the operator registry the lexer reads.
//!
//! Every kind registers the actions it owns into [`OPERATOR_LOOKUP`], keyed
//! by literal syntax. The lexer accepts exactly the characters found there
//! as single-character operator identifiers.

use std::{collections::HashMap, fmt::Display};

use lazy_static::lazy_static;
use serde::Serialize;

use crate::errors::errors::ErrorImpl;

use super::{kinds::ValueKind, value::Value};

lazy_static! {
    pub static ref OPERATOR_LOOKUP: HashMap<char, Vec<(ValueKind, ActionName)>> = {
        let mut map: HashMap<char, Vec<(ValueKind, ActionName)>> = HashMap::new();
        for kind in ValueKind::ALL {
            for action in kind.actions() {
                if let Some(symbol) = action.literal_syntax {
                    map.entry(symbol).or_default().push((kind, action.name));
                }
            }
        }
        map
    };
}

/// Every character registered as an operator, sorted.
pub fn operator_symbols() -> Vec<char> {
    let mut symbols = OPERATOR_LOOKUP.keys().copied().collect::<Vec<char>>();
    symbols.sort_unstable();
    symbols
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionName {
    Add,
    Subtract,
    Multiply,
    Divide,
    Get,
}

impl Display for ActionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionName::Add => write!(f, "add"),
            ActionName::Subtract => write!(f, "subtract"),
            ActionName::Multiply => write!(f, "multiply"),
            ActionName::Divide => write!(f, "divide"),
            ActionName::Get => write!(f, "get"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Action {
    pub name: ActionName,
    /// One-character operator spelling, if the action has one.
    pub literal_syntax: Option<char>,
    /// Accepts any number of trailing arguments matching `arguments[0]`.
    pub spread_arguments: bool,
    pub arguments: &'static [&'static [ValueKind]],
}

impl Action {
    /// Kinds accepted for the argument at `index`.
    pub fn accepted_kinds(&self, index: usize) -> Option<&'static [ValueKind]> {
        if self.spread_arguments {
            self.arguments.first().copied()
        } else {
            self.arguments.get(index).copied()
        }
    }
}

const NUMERIC_ARGUMENTS: &[&[ValueKind]] = &[&ValueKind::NUMERIC];

pub static NUMBER_ACTIONS: [Action; 4] = [
    Action {
        name: ActionName::Add,
        literal_syntax: Some('+'),
        spread_arguments: true,
        arguments: NUMERIC_ARGUMENTS,
    },
    Action {
        name: ActionName::Subtract,
        literal_syntax: Some('-'),
        spread_arguments: true,
        arguments: NUMERIC_ARGUMENTS,
    },
    Action {
        name: ActionName::Multiply,
        literal_syntax: Some('*'),
        spread_arguments: true,
        arguments: NUMERIC_ARGUMENTS,
    },
    Action {
        name: ActionName::Divide,
        literal_syntax: Some('/'),
        spread_arguments: true,
        arguments: NUMERIC_ARGUMENTS,
    },
];

pub static OBJECT_ACTIONS: [Action; 1] = [Action {
    name: ActionName::Get,
    literal_syntax: Some('.'),
    spread_arguments: false,
    arguments: &[&[ValueKind::String]],
}];

/// Folds `operands` into `initial` left to right with the semantics of `kind`.
///
/// Integer kinds use checked integer arithmetic while every operand is
/// integral and fall back to floating point otherwise. Float kinds always
/// use floating point, so dividing by zero yields an infinity or NaN that
/// the kind's bounds later reject.
pub fn fold_numeric(
    kind: ValueKind,
    action: ActionName,
    initial: &Value,
    operands: &[&Value],
) -> Result<Value, ErrorImpl> {
    operands
        .iter()
        .try_fold(initial.clone(), |accumulator, operand| {
            apply_numeric(kind, action, &accumulator, operand)
        })
}

fn apply_numeric(
    kind: ValueKind,
    action: ActionName,
    lhs: &Value,
    rhs: &Value,
) -> Result<Value, ErrorImpl> {
    if kind.is_integer() {
        if let (Some(a), Some(b)) = (lhs.as_integer(), rhs.as_integer()) {
            let result = match action {
                ActionName::Add => a.checked_add(b),
                ActionName::Subtract => a.checked_sub(b),
                ActionName::Multiply => a.checked_mul(b),
                ActionName::Divide if b == 0 => return Err(ErrorImpl::DivisionByZero),
                ActionName::Divide => a.checked_div(b),
                ActionName::Get => return Err(not_numeric(action)),
            };

            return result.map(Value::Integer).ok_or(ErrorImpl::ArithmeticOverflow);
        }
    }

    let (Some(a), Some(b)) = (lhs.as_float(), rhs.as_float()) else {
        return Err(ErrorImpl::ArgumentTypeMatchError {
            expected: String::from("number"),
            received: rhs.to_string(),
        });
    };

    match action {
        ActionName::Add => Ok(Value::Float(a + b)),
        ActionName::Subtract => Ok(Value::Float(a - b)),
        ActionName::Multiply => Ok(Value::Float(a * b)),
        ActionName::Divide => Ok(Value::Float(a / b)),
        ActionName::Get => Err(not_numeric(action)),
    }
}

fn not_numeric(action: ActionName) -> ErrorImpl {
    ErrorImpl::UnexpectedTokenDetailed {
        token: action.to_string(),
        message: String::from("not a numeric action"),
    }
}
