//! Routing tables: `(resource, operation)` to endpoint path and body layout.
//!
//! Both API surfaces are described by the same table shape and evaluated by
//! one interpreter, [`RequestBuilder`].

mod builder;
mod tables;

pub use builder::{selection_of, RequestBuilder};
pub use tables::{MANAGEMENT_ROUTES, QUERY_ROUTES};

use crate::types::{ResourceOperation, Surface};

/// Where a body field's value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// The catalog value of the named parameter, as is.
    Param(&'static str),
    /// A comma-separated string parameter, sent as a trimmed list.
    SplitList(&'static str),
    /// A string parameter sent as a list when it contains a comma.
    ScalarOrList(&'static str),
    /// The account id from the credentials.
    AccountId,
}

impl FieldSource {
    pub fn param_name(&self) -> Option<&'static str> {
        match self {
            FieldSource::Param(n) | FieldSource::SplitList(n) | FieldSource::ScalarOrList(n) => {
                Some(n)
            }
            FieldSource::AccountId => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inclusion {
    Always,
    /// Omitted when the value is `null` or an empty string, list or object.
    IfNonEmpty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyField {
    pub key: &'static str,
    pub source: FieldSource,
    pub inclusion: Inclusion,
}

impl BodyField {
    pub const fn param(key: &'static str, name: &'static str) -> Self {
        Self {
            key,
            source: FieldSource::Param(name),
            inclusion: Inclusion::Always,
        }
    }

    pub const fn split(key: &'static str, name: &'static str) -> Self {
        Self {
            key,
            source: FieldSource::SplitList(name),
            inclusion: Inclusion::Always,
        }
    }

    pub const fn scalar_or_list(key: &'static str, name: &'static str) -> Self {
        Self {
            key,
            source: FieldSource::ScalarOrList(name),
            inclusion: Inclusion::Always,
        }
    }

    pub const fn account_id(key: &'static str) -> Self {
        Self {
            key,
            source: FieldSource::AccountId,
            inclusion: Inclusion::Always,
        }
    }

    pub const fn if_non_empty(mut self) -> Self {
        self.inclusion = Inclusion::IfNonEmpty;
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub selection: ResourceOperation,
    pub path: &'static str,
    pub fields: &'static [BodyField],
}

#[derive(Debug, Clone, Copy)]
pub struct RoutingTable {
    pub surface: Surface,
    /// Fields every request on this surface starts with.
    pub seed: &'static [BodyField],
    pub routes: &'static [Route],
}

impl RoutingTable {
    pub fn route(&self, selection: ResourceOperation) -> Option<&'static Route> {
        self.routes.iter().find(|r| r.selection == selection)
    }
}

pub fn table_for(surface: Surface) -> &'static RoutingTable {
    match surface {
        Surface::Query => &QUERY_ROUTES,
        Surface::Management => &MANAGEMENT_ROUTES,
    }
}
