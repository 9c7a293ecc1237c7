use std::slice::Iter;

use serde::Serialize;

use super::{call::FunctionCall, variable::Variable};

/// A top-level entry of the program body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "lowercase")]
pub enum Node {
    Variable(Variable),
    Call(FunctionCall),
}

impl Node {
    /// The name this node occupies in the program scope.
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Variable(variable) => variable.name(),
            Node::Call(call) => call.function_name(),
        }
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Node::Variable(variable) => Some(variable),
            Node::Call(_) => None,
        }
    }

    pub fn as_call(&self) -> Option<&FunctionCall> {
        match self {
            Node::Call(call) => Some(call),
            Node::Variable(_) => None,
        }
    }
}

impl From<Variable> for Node {
    fn from(variable: Variable) -> Self {
        Node::Variable(variable)
    }
}

impl From<FunctionCall> for Node {
    fn from(call: FunctionCall) -> Self {
        Node::Call(call)
    }
}

/// The parsed program: a flat body sharing one scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Program {
    pub body: Vec<Node>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    pub fn push(&mut self, node: Node) {
        self.body.push(node);
    }

    pub fn iter(&self) -> Iter<'_, Node> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn find_variable(&self, name: &str) -> Option<&Variable> {
        self.body
            .iter()
            .filter_map(Node::as_variable)
            .find(|variable| variable.name() == Some(name))
    }

    /// Whether any variable or call already uses `name`.
    pub fn contains_name(&self, name: &str) -> bool {
        self.body.iter().any(|node| node.name() == Some(name))
    }
}
