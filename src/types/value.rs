use std::fmt::Display;

use serde::Serialize;

use crate::{ast::variable::Variable, errors::errors::ErrorImpl};

/// A dynamically typed value held by a variable.
///
/// Integers are kept wide enough to hold every `i64` and `u64`; the owning
/// kind's bounds decide what actually fits.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i128),
    Float(f64),
    Bool(bool),
    String(String),
    Object(Vec<Variable>),
}

impl Value {
    /// Parses the raw text of a numeric literal.
    pub fn from_numeric_literal(text: &str) -> Result<Value, ErrorImpl> {
        let error = || ErrorImpl::NumberParseError {
            token: text.to_string(),
        };

        if text.contains('.') {
            text.parse::<f64>().map(Value::Float).map_err(|_| error())
        } else {
            text.parse::<i128>().map(Value::Integer).map_err(|_| error())
        }
    }

    pub fn as_integer(&self) -> Option<i128> {
        match self {
            Value::Integer(integer) => Some(*integer),
            Value::Float(float)
                if float.is_finite()
                    && float.fract() == 0.0
                    && *float >= i128::MIN as f64
                    && *float < i128::MAX as f64 =>
            {
                Some(*float as i128)
            }
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Integer(integer) => Some(*integer as f64),
            Value::Float(float) => Some(*float),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(string) => Some(string),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(integer) => write!(f, "{}", integer),
            // Whole floats keep their decimal point, kind inference reads it
            Value::Float(float) if float.is_finite() && float.fract() == 0.0 => {
                write!(f, "{:.1}", float)
            }
            Value::Float(float) => write!(f, "{}", float),
            Value::Bool(boolean) => write!(f, "{}", boolean),
            Value::String(string) => write!(f, "{}", string),
            Value::Object(members) => {
                write!(f, "{{")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match member.value() {
                        Some(value) => write!(f, "{}: {}", member.name().unwrap_or("_"), value)?,
                        None => write!(f, "{}", member.name().unwrap_or("_"))?,
                    }
                }
                write!(f, "}}")
            }
        }
    }
}
