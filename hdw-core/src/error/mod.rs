use thiserror::Error;

use crate::catalog::FieldKind;
use crate::types::{Operation, Resource, Surface};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {name}")]
pub struct UnknownNameError {
    pub kind: &'static str,
    pub name: String,
}

impl UnknownNameError {
    pub fn new(kind: &'static str, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("missing required parameter: {name}")]
    Missing { name: String },
    #[error("parameter {name} must be a {expected}, got {found}")]
    Type {
        name: String,
        expected: FieldKind,
        found: String,
    },
    #[error("parameter {name} has invalid value {value:?} (allowed: {})", allowed.join(", "))]
    InvalidOption {
        name: String,
        value: String,
        allowed: Vec<String>,
    },
    #[error("parameter {name} is not declared for {surface} {resource}/{operation}")]
    Undeclared {
        name: String,
        surface: Surface,
        resource: Resource,
        operation: Operation,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    #[error("no {surface} route for {resource}/{operation}")]
    Unmapped {
        surface: Surface,
        resource: Resource,
        operation: Operation,
    },
    #[error("missing {0} selector")]
    MissingSelector(&'static str),
    #[error(transparent)]
    UnknownName(#[from] UnknownNameError),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error(transparent)]
    Param(#[from] ParamError),
    #[error("account id is required for {surface} requests")]
    MissingAccountId { surface: Surface },
}

#[derive(Debug, Error)]
#[error("routing tables failed consistency check ({violations_len} violations)")]
pub struct CheckError {
    pub violations: Vec<Violation>,
    violations_len: usize,
}

impl CheckError {
    pub fn new(violations: Vec<Violation>) -> Self {
        let violations_len = violations.len();
        Self {
            violations,
            violations_len,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}
