use serde::Serialize;

use crate::{
    errors::errors::ErrorImpl,
    types::{kinds::ValueKind, value::Value},
};

use super::{
    ast::Program,
    variable::{Variable, VariableReference},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "argument", rename_all = "lowercase")]
pub enum Argument {
    Literal(Variable),
    Reference(VariableReference),
}

impl Argument {
    pub fn value<'a>(&'a self, program: &'a Program) -> Option<&'a Value> {
        match self {
            Argument::Literal(variable) => variable.value(),
            Argument::Reference(reference) => reference.value(program).ok(),
        }
    }

    pub fn kind(&self, program: &Program) -> Result<ValueKind, ErrorImpl> {
        match self {
            Argument::Literal(variable) => Ok(variable.kind()),
            Argument::Reference(reference) => reference.kind(program),
        }
    }
}

/// A call to a function the execution engine provides.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FunctionCall {
    function_name: Option<String>,
    arguments: Vec<Argument>,
}

impl FunctionCall {
    pub fn new() -> Self {
        FunctionCall::default()
    }

    pub fn set_function_name(mut self, name: impl Into<String>) -> Result<Self, ErrorImpl> {
        if let Some(name) = &self.function_name {
            return Err(ErrorImpl::NameAlreadyAssigned { name: name.clone() });
        }

        self.function_name = Some(name.into());
        Ok(self)
    }

    pub fn set_arguments(mut self, arguments: Vec<Argument>) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn function_name(&self) -> Option<&str> {
        self.function_name.as_deref()
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }
}
