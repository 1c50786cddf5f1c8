use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::{catalog_for, FieldDefault, FieldKind, FieldSpec};
use crate::error::{CheckError, Violation};
use crate::routing::{table_for, BodyField, FieldSource, Route};
use crate::types::Surface;

pub(crate) static BODY_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("valid"));
pub(crate) static FIELD_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("valid"));

pub struct Validator {
    violations: Vec<Violation>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    pub fn finish(self) -> Result<(), CheckError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(CheckError::new(self.violations))
        }
    }

    pub(crate) fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.violations.push(Violation::new(path, message));
    }

    pub fn check_surface(&mut self, surface: Surface) {
        let table = table_for(surface);
        let catalog = catalog_for(surface);

        if table.surface != surface {
            self.push(surface.as_str(), format!("table is labelled {}", table.surface));
        }

        let mut selections = BTreeSet::new();
        for entry in catalog {
            let path = format!("catalog.{surface}.{}", entry.selection);
            if !selections.insert(entry.selection) {
                self.push(&path, "declared more than once");
            }
            self.check_fields(&path, entry.fields);
            if table.route(entry.selection).is_none() {
                self.push(&path, "no route for this operation");
            }
        }

        let mut paths = BTreeSet::new();
        let mut routed = BTreeSet::new();
        for route in table.routes {
            let path = format!("routes.{surface}.{}", route.selection);
            if !routed.insert(route.selection) {
                self.push(&path, "routed more than once");
            }
            if route.path.is_empty() {
                self.push(&path, "empty endpoint path");
            } else if !route.path.starts_with("/api/") {
                self.push(&path, format!("path {} is outside /api/", route.path));
            }
            if !paths.insert(route.path) {
                self.push(&path, format!("path {} is shared with another route", route.path));
            }
            match catalog.iter().find(|e| e.selection == route.selection) {
                Some(entry) => self.check_route(&path, table.seed, route, entry.fields),
                None => self.push(&path, "operation has no catalog entry"),
            }
        }
    }

    fn check_fields(&mut self, path: &str, fields: &[FieldSpec]) {
        let mut names = BTreeSet::new();
        for field in fields {
            let fpath = format!("{path}.{}", field.name);
            if !FIELD_NAME_RE.is_match(field.name) {
                self.push(&fpath, "invalid field name");
            }
            if !names.insert((field.collection, field.name)) {
                self.push(&fpath, "declared more than once");
            }
            if field.required && field.collection.is_some() {
                self.push(&fpath, "collection members cannot be required");
            }
            let has_options = matches!(field.kind, FieldKind::Options | FieldKind::MultiOptions);
            if has_options && field.options.is_empty() {
                self.push(&fpath, "option field without options");
            }
            if let FieldDefault::Str(d) = field.default {
                if has_options && !field.options.contains(&d) {
                    self.push(&fpath, format!("default {d:?} is not an allowed option"));
                }
            }
        }
    }

    fn check_route(
        &mut self,
        path: &str,
        seed: &[BodyField],
        route: &Route,
        fields: &[FieldSpec],
    ) {
        let mut keys = BTreeSet::new();
        let mut used = BTreeSet::new();
        for body_field in seed.iter().chain(route.fields) {
            let kpath = format!("{path}.{}", body_field.key);
            if !BODY_KEY_RE.is_match(body_field.key) {
                self.push(&kpath, "body key must be snake_case");
            }
            if !keys.insert(body_field.key) {
                self.push(&kpath, "body key set more than once");
            }
            let Some(name) = body_field.source.param_name() else {
                continue;
            };
            used.insert(name);
            match fields.iter().find(|f| f.name == name) {
                None => self.push(&kpath, format!("reads undeclared parameter {name}")),
                Some(spec) => {
                    let derived = matches!(
                        body_field.source,
                        FieldSource::SplitList(_) | FieldSource::ScalarOrList(_)
                    );
                    if derived && spec.kind != FieldKind::String {
                        self.push(&kpath, format!("list derivation on {} parameter", spec.kind));
                    }
                }
            }
        }
        for field in fields {
            if !used.contains(field.name) {
                let message = if field.required {
                    "required parameter is never sent"
                } else {
                    "parameter is never sent"
                };
                self.push(format!("{path}.{}", field.name), message);
            }
        }
    }
}
