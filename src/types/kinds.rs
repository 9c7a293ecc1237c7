//! The closed set of value kinds and their validity predicates.

use std::fmt::Display;

use serde::Serialize;

use super::{
    actions::{Action, NUMBER_ACTIONS, OBJECT_ACTIONS},
    value::Value,
};

/// Kind given to un-annotated numeric values written without a decimal point.
pub const DEFAULT_INTEGER_KIND: ValueKind = ValueKind::I64;
/// Kind given to un-annotated numeric values written with a decimal point.
pub const DEFAULT_FLOAT_KIND: ValueKind = ValueKind::F64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    String,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Bool,
    Char,
    Object,
}

/// Closed interval a numeric kind's values must lie within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounds {
    Integer(i128, i128),
    Float(f64, f64),
}

impl ValueKind {
    pub const ALL: [ValueKind; 14] = [
        ValueKind::String,
        ValueKind::I8,
        ValueKind::I16,
        ValueKind::I32,
        ValueKind::I64,
        ValueKind::U8,
        ValueKind::U16,
        ValueKind::U32,
        ValueKind::U64,
        ValueKind::F32,
        ValueKind::F64,
        ValueKind::Bool,
        ValueKind::Char,
        ValueKind::Object,
    ];

    pub const NUMERIC: [ValueKind; 10] = [
        ValueKind::I8,
        ValueKind::I16,
        ValueKind::I32,
        ValueKind::I64,
        ValueKind::U8,
        ValueKind::U16,
        ValueKind::U32,
        ValueKind::U64,
        ValueKind::F32,
        ValueKind::F64,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::I8 => "i8",
            ValueKind::I16 => "i16",
            ValueKind::I32 => "i32",
            ValueKind::I64 => "i64",
            ValueKind::U8 => "u8",
            ValueKind::U16 => "u16",
            ValueKind::U32 => "u32",
            ValueKind::U64 => "u64",
            ValueKind::F32 => "f32",
            ValueKind::F64 => "f64",
            ValueKind::Bool => "bool",
            ValueKind::Char => "char",
            ValueKind::Object => "object",
        }
    }

    pub fn from_name(name: &str) -> Option<ValueKind> {
        ValueKind::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn is_integer(&self) -> bool {
        matches!(self.bounds(), Some(Bounds::Integer(..)))
    }

    pub fn is_float(&self) -> bool {
        matches!(self.bounds(), Some(Bounds::Float(..)))
    }

    pub fn is_numeric(&self) -> bool {
        self.bounds().is_some()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            ValueKind::I8 => Some(Bounds::Integer(-128, 127)),
            ValueKind::I16 => Some(Bounds::Integer(-32768, 32767)),
            ValueKind::I32 => Some(Bounds::Integer(-2147483648, 2147483647)),
            ValueKind::I64 => Some(Bounds::Integer(
                -9223372036854775808,
                9223372036854775807,
            )),
            ValueKind::U8 => Some(Bounds::Integer(0, 255)),
            ValueKind::U16 => Some(Bounds::Integer(0, 65535)),
            ValueKind::U32 => Some(Bounds::Integer(0, 4294967295)),
            ValueKind::U64 => Some(Bounds::Integer(0, 18446744073709551615)),
            ValueKind::F32 => Some(Bounds::Float(
                -3.4028234663852886e38,
                3.4028234663852886e38,
            )),
            ValueKind::F64 => Some(Bounds::Float(
                -1.7976931348623157e308,
                1.7976931348623157e308,
            )),
            _ => None,
        }
    }

    /// Whether `value` is admissible for this kind.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, self.bounds()) {
            (_, Some(Bounds::Integer(min, max))) => {
                is_whole_number(value) && value.as_integer().is_some_and(|v| v >= min && v <= max)
            }
            (_, Some(Bounds::Float(min, max))) => {
                is_number(value) && value.as_float().is_some_and(|v| v >= min && v <= max)
            }
            (ValueKind::Bool, None) => matches!(value, Value::Bool(_)),
            (ValueKind::Char, None) => {
                matches!(value, Value::String(string) if string.chars().count() == 1)
            }
            (ValueKind::String, None) => matches!(value, Value::String(_)),
            (ValueKind::Object, None) => matches!(value, Value::Object(_)),
            _ => false,
        }
    }

    /// Converts an admissible numeric value into this kind's representation.
    pub fn normalise(&self, value: Value) -> Value {
        match self.bounds() {
            Some(Bounds::Integer(..)) => match value.as_integer() {
                Some(integer) => Value::Integer(integer),
                None => value,
            },
            Some(Bounds::Float(..)) => match value.as_float() {
                Some(float) => Value::Float(float),
                None => value,
            },
            None => value,
        }
    }

    pub fn actions(&self) -> &'static [Action] {
        if self.is_numeric() {
            &NUMBER_ACTIONS
        } else if *self == ValueKind::Object {
            &OBJECT_ACTIONS
        } else {
            &[]
        }
    }

    /// Finds the action written as `symbol` in source, if this kind has one.
    pub fn action_for_symbol(&self, symbol: &str) -> Option<&'static Action> {
        let mut chars = symbol.chars();
        let (Some(first), None) = (chars.next(), chars.next()) else {
            return None;
        };

        self.actions()
            .iter()
            .find(|action| action.literal_syntax == Some(first))
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn is_number(value: &Value) -> bool {
    matches!(value, Value::Integer(_) | Value::Float(_))
}

fn is_whole_number(value: &Value) -> bool {
    match value {
        Value::Integer(_) => true,
        Value::Float(float) => float.is_finite() && float.fract() == 0.0,
        _ => false,
    }
}
