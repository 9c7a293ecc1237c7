use serde::Serialize;

use crate::{
    errors::errors::ErrorImpl,
    types::{
        actions::{fold_numeric, Action, ActionName},
        kinds::ValueKind,
        value::Value,
    },
};

use super::ast::Program;

/// A typed, single-assignment value.
///
/// Both the name and the value can be set exactly once. The value is
/// checked against the kind's predicate when it is set and never again.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variable {
    name: Option<String>,
    #[serde(rename = "type")]
    kind: ValueKind,
    value: Option<Value>,
    #[serde(skip_serializing_if = "has_no_actions")]
    actions: &'static [Action],
}

impl Variable {
    /// Creates an unnamed, unvalued variable carrying `kind`'s actions.
    pub fn new(kind: ValueKind) -> Self {
        Variable {
            name: None,
            kind,
            value: None,
            actions: kind.actions(),
        }
    }

    pub fn anonymous(kind: ValueKind, value: Value) -> Result<Self, ErrorImpl> {
        Variable::new(kind).set_value(value)
    }

    pub fn set_name(mut self, name: impl Into<String>) -> Result<Self, ErrorImpl> {
        if let Some(name) = &self.name {
            return Err(ErrorImpl::NameAlreadyAssigned { name: name.clone() });
        }

        self.name = Some(name.into());
        Ok(self)
    }

    pub fn set_value(mut self, value: Value) -> Result<Self, ErrorImpl> {
        if self.value.is_some() {
            return Err(ErrorImpl::ValueAlreadyAssigned {
                kind: self.kind.to_string(),
            });
        }

        if !self.kind.accepts(&value) {
            return Err(ErrorImpl::ValueTypeMismatch {
                value: value.to_string(),
                kind: self.kind.to_string(),
            });
        }

        self.value = Some(self.kind.normalise(value));
        Ok(self)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn actions(&self) -> &'static [Action] {
        self.actions
    }

    /// Looks up a named member of an object value.
    pub fn member(&self, name: &str) -> Option<&Variable> {
        match &self.value {
            Some(Value::Object(members)) => members.iter().find(|member| member.name() == Some(name)),
            _ => None,
        }
    }

    pub fn action_for_symbol(&self, symbol: &str) -> Option<&'static Action> {
        self.actions
            .iter()
            .find(|action| action.literal_syntax.is_some_and(|c| symbol.chars().eq([c])))
    }

    /// Runs `action` with this variable as the receiver.
    pub fn invoke(&self, action: &Action, arguments: &[&Variable]) -> Result<Value, ErrorImpl> {
        let arity = action.arguments.len();
        if !action.spread_arguments && arguments.len() < arity {
            return Err(ErrorImpl::MissingArguments {
                expected: arity,
                received: arguments.len(),
            });
        }
        if !action.spread_arguments && arguments.len() > arity {
            return Err(ErrorImpl::UnexpectedArguments {
                expected: arity,
                received: arguments.len(),
            });
        }

        for (index, argument) in arguments.iter().enumerate() {
            let accepted = action.accepted_kinds(index).unwrap_or(&[]);
            if !accepted.contains(&argument.kind()) {
                return Err(ErrorImpl::ArgumentTypeMatchError {
                    expected: accepted
                        .iter()
                        .map(|kind| kind.name())
                        .collect::<Vec<_>>()
                        .join(" | "),
                    received: argument.kind().to_string(),
                });
            }
        }

        let receiver = self.assigned_value()?;
        let operands = arguments
            .iter()
            .map(|argument| argument.assigned_value())
            .collect::<Result<Vec<_>, _>>()?;

        match action.name {
            ActionName::Get => {
                let member = operands[0].as_str().unwrap_or_default();
                self.member(member)
                    .and_then(|variable| variable.value().cloned())
                    .ok_or_else(|| ErrorImpl::MemberNotFound {
                        member: member.to_string(),
                    })
            }
            name => fold_numeric(self.kind, name, receiver, &operands),
        }
    }

    fn assigned_value(&self) -> Result<&Value, ErrorImpl> {
        self.value.as_ref().ok_or_else(|| ErrorImpl::ValueTypeMismatch {
            value: String::from("nothing"),
            kind: self.kind.to_string(),
        })
    }
}

fn has_no_actions(actions: &&'static [Action]) -> bool {
    actions.is_empty()
}

/// A by-name handle to a variable declared earlier in the program.
///
/// Resolution happens on every access, against the program passed in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableReference {
    name: String,
}

impl VariableReference {
    pub fn new(name: impl Into<String>, program: &Program) -> Result<Self, ErrorImpl> {
        let reference = VariableReference { name: name.into() };
        reference.resolve(program)?;
        Ok(reference)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resolve<'a>(&self, program: &'a Program) -> Result<&'a Variable, ErrorImpl> {
        program
            .find_variable(&self.name)
            .ok_or_else(|| ErrorImpl::VariableNotDeclared {
                variable: self.name.clone(),
            })
    }

    pub fn value<'a>(&self, program: &'a Program) -> Result<&'a Value, ErrorImpl> {
        self.resolve(program)?.assigned_value()
    }

    pub fn kind(&self, program: &Program) -> Result<ValueKind, ErrorImpl> {
        Ok(self.resolve(program)?.kind())
    }
}
