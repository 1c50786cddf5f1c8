#![forbid(unsafe_code)]

pub mod catalog;
pub mod derive;
pub mod error;
pub mod routing;
pub mod types;
pub mod validate;

pub use crate::catalog::{fields_for, FieldKind, FieldSpec, ItemParams};
pub use crate::error::{BuildError, CheckError, ParamError, RouteError, UnknownNameError, Violation};
pub use crate::routing::{selection_of, RequestBuilder};
pub use crate::types::{
    InputItem, Operation, OutputRecord, RequestSpec, Resource, ResourceOperation, Surface,
};
pub use crate::validate::check_tables;
