use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::UnterminatedNumber { .. } => "UnterminatedNumber",
            ErrorImpl::UnexpectedEndOfFile { .. } => "UnexpectedEndOfFile",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::IncalculableToken { .. } => "IncalculableToken",
            ErrorImpl::InvalidTypeDescriptor { .. } => "InvalidTypeDescriptor",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::UnexpectedTypeDescriptor => "UnexpectedTypeDescriptor",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::NameAlreadyDeclared { .. } => "NameAlreadyDeclared",
            ErrorImpl::NameAlreadyAssigned { .. } => "NameAlreadyAssigned",
            ErrorImpl::EmptyExpression => "EmptyExpression",
            ErrorImpl::IrreducibleExpression { .. } => "IrreducibleExpression",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedArguments { .. } => "UnexpectedArguments",
            ErrorImpl::MissingArguments { .. } => "MissingArguments",
            ErrorImpl::ArgumentTypeMatchError { .. } => "ArgumentTypeMatchError",
            ErrorImpl::MemberNotFound { .. } => "MemberNotFound",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::ArithmeticOverflow => "ArithmeticOverflow",
            ErrorImpl::ValueTypeMismatch { .. } => "ValueTypeMismatch",
            ErrorImpl::ValueAlreadyAssigned { .. } => "ValueAlreadyAssigned",
        }
    }

    pub fn get_category(&self) -> ErrorCategory {
        self.internal_error.category()
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("Add a closing `\"` to the string"))
            }
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Close the block comment with `*/`"))
            }
            ErrorImpl::UnterminatedNumber { token } => ErrorTip::Suggestion(format!(
                "`{}` runs into the end of the file, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedEndOfFile { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::IncalculableToken { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot appear in a value, only literals, names and operators can",
                token
            )),
            ErrorImpl::InvalidTypeDescriptor { variable } => ErrorTip::Suggestion(format!(
                "Write the type of `{}` as a name, e.g. `as i32`",
                variable
            )),
            ErrorImpl::UnknownType { type_ } => {
                ErrorTip::Suggestion(format!("Unknown type `{}` found", type_))
            }
            ErrorImpl::UnexpectedTypeDescriptor => ErrorTip::Suggestion(String::from(
                "`as` may only appear once, right before the type name",
            )),
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::NameAlreadyDeclared { name } => {
                ErrorTip::Suggestion(format!("`{}` already declared", name))
            }
            ErrorImpl::NameAlreadyAssigned { .. } => ErrorTip::None,
            ErrorImpl::EmptyExpression => ErrorTip::Suggestion(String::from(
                "Expected a value between `=` and `;`",
            )),
            ErrorImpl::IrreducibleExpression { .. } => ErrorTip::Suggestion(String::from(
                "Only a single operator can be applied per declaration",
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnexpectedArguments { expected, received } => ErrorTip::Suggestion(format!(
                "Expected {} arguments, received {}",
                expected, received
            )),
            ErrorImpl::MissingArguments { expected, received } => ErrorTip::Suggestion(format!(
                "Expected {} arguments, received {}",
                expected, received
            )),
            ErrorImpl::ArgumentTypeMatchError { expected, received } => {
                ErrorTip::Suggestion(format!(
                    "Expected argument type `{}`, received `{}`",
                    expected, received
                ))
            }
            ErrorImpl::MemberNotFound { member } => {
                ErrorTip::Suggestion(format!("Object has no member `{}`", member))
            }
            ErrorImpl::DivisionByZero => ErrorTip::None,
            ErrorImpl::ArithmeticOverflow => ErrorTip::None,
            ErrorImpl::ValueTypeMismatch { value, kind } => ErrorTip::Suggestion(format!(
                "`{}` does not fit in `{}`, try a wider type",
                value, kind
            )),
            ErrorImpl::ValueAlreadyAssigned { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Which stage of the front end raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lex,
    Parse,
    Validation,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected end of file while looking for closing `\"` of string")]
    UnterminatedString,
    #[error("unexpected end of file while looking for closing `*/` of comment")]
    UnterminatedComment,
    #[error("unexpected end of file while looking for number: {token:?}")]
    UnterminatedNumber { token: String },
    #[error("unexpected end of file while looking for {expected}")]
    UnexpectedEndOfFile { expected: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unexpected incalculable token {token:?}")]
    IncalculableToken { token: String },
    #[error("invalid type descriptor for variable {variable:?}")]
    InvalidTypeDescriptor { variable: String },
    #[error("unknown type {type_} found")]
    UnknownType { type_: String },
    #[error("unexpected type descriptor")]
    UnexpectedTypeDescriptor,
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("{name:?} already declared")]
    NameAlreadyDeclared { name: String },
    #[error("cannot rename {name:?}, names are assigned once")]
    NameAlreadyAssigned { name: String },
    #[error("expected a value, found nothing")]
    EmptyExpression,
    #[error("unable to reduce expression to single value ({remaining} values left)")]
    IrreducibleExpression { remaining: usize },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unexpected arguments: expected {expected:?}, received {received:?}")]
    UnexpectedArguments { expected: usize, received: usize },
    #[error("missing arguments: expected {expected:?}, received {received:?}")]
    MissingArguments { expected: usize, received: usize },
    #[error("argument types do not match: expected {expected:?}, received {received:?}")]
    ArgumentTypeMatchError { expected: String, received: String },
    #[error("member {member:?} not found")]
    MemberNotFound { member: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("arithmetic overflow")]
    ArithmeticOverflow,
    #[error("value {value} is not of type {kind}")]
    ValueTypeMismatch { value: String, kind: String },
    #[error("value of {kind} is already assigned")]
    ValueAlreadyAssigned { kind: String },
}

impl ErrorImpl {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorImpl::UnrecognisedToken { .. }
            | ErrorImpl::UnterminatedString
            | ErrorImpl::UnterminatedComment
            | ErrorImpl::UnterminatedNumber { .. } => ErrorCategory::Lex,
            ErrorImpl::ValueTypeMismatch { .. } | ErrorImpl::ValueAlreadyAssigned { .. } => {
                ErrorCategory::Validation
            }
            _ => ErrorCategory::Parse,
        }
    }
}
