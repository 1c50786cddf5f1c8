//! Field declarations for every `(surface, resource, operation)`.
//!
//! The catalog is the only place that knows field types and defaults. Request
//! building asks it for values through [`ItemParams`], which applies defaults
//! and coerces raw item values to the declared kind.

mod params;
mod tables;

use std::fmt;

pub use params::ItemParams;
pub use tables::{MANAGEMENT_CATALOG, QUERY_CATALOG};

use serde_json::Value as JsonValue;

use crate::types::{ResourceOperation, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    /// One value out of [`FieldSpec::options`].
    Options,
    /// Any subset of [`FieldSpec::options`], sent as a list.
    MultiOptions,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Options => "option",
            FieldKind::MultiOptions => "option list",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDefault {
    None,
    Str(&'static str),
    Int(i64),
    Bool(bool),
}

impl FieldDefault {
    pub fn to_value(&self) -> Option<JsonValue> {
        match self {
            FieldDefault::None => None,
            FieldDefault::Str(s) => Some(JsonValue::String((*s).to_string())),
            FieldDefault::Int(n) => Some(JsonValue::from(*n)),
            FieldDefault::Bool(b) => Some(JsonValue::Bool(*b)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub display_name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: FieldDefault,
    pub options: &'static [&'static str],
    /// Optional-collection parameter this field lives under, if any.
    pub collection: Option<&'static str>,
    pub description: &'static str,
}

impl FieldSpec {
    const fn new(name: &'static str, display_name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            display_name,
            kind,
            required: false,
            default: FieldDefault::None,
            options: &[],
            collection: None,
            description: "",
        }
    }

    pub const fn string(name: &'static str, display_name: &'static str) -> Self {
        Self::new(name, display_name, FieldKind::String)
    }

    pub const fn number(name: &'static str, display_name: &'static str) -> Self {
        Self::new(name, display_name, FieldKind::Number)
    }

    pub const fn boolean(name: &'static str, display_name: &'static str) -> Self {
        Self::new(name, display_name, FieldKind::Boolean)
    }

    pub const fn options(
        name: &'static str,
        display_name: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        let mut f = Self::new(name, display_name, FieldKind::Options);
        f.options = options;
        f
    }

    pub const fn multi_options(
        name: &'static str,
        display_name: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        let mut f = Self::new(name, display_name, FieldKind::MultiOptions);
        f.options = options;
        f
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn default_str(mut self, v: &'static str) -> Self {
        self.default = FieldDefault::Str(v);
        self
    }

    pub const fn default_int(mut self, v: i64) -> Self {
        self.default = FieldDefault::Int(v);
        self
    }

    pub const fn default_bool(mut self, v: bool) -> Self {
        self.default = FieldDefault::Bool(v);
        self
    }

    pub const fn in_collection(mut self, collection: &'static str) -> Self {
        self.collection = Some(collection);
        self
    }

    pub const fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }
}

/// The declared fields of one operation.
#[derive(Debug, Clone, Copy)]
pub struct OperationFields {
    pub selection: ResourceOperation,
    pub fields: &'static [FieldSpec],
}

pub fn catalog_for(surface: Surface) -> &'static [OperationFields] {
    match surface {
        Surface::Query => QUERY_CATALOG,
        Surface::Management => MANAGEMENT_CATALOG,
    }
}

pub fn fields_for(surface: Surface, selection: ResourceOperation) -> Option<&'static [FieldSpec]> {
    catalog_for(surface)
        .iter()
        .find(|o| o.selection == selection)
        .map(|o| o.fields)
}

pub fn operations(surface: Surface) -> impl Iterator<Item = ResourceOperation> {
    catalog_for(surface).iter().map(|o| o.selection)
}
