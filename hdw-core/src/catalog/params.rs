use serde_json::Value as JsonValue;

use crate::catalog::{FieldKind, FieldSpec};
use crate::derive::split_list;
use crate::error::ParamError;
use crate::types::{InputItem, ResourceOperation, Surface};

/// Typed view of one item's parameters for a single operation.
pub struct ItemParams<'a> {
    item: &'a InputItem,
    surface: Surface,
    selection: ResourceOperation,
    fields: &'static [FieldSpec],
}

impl<'a> ItemParams<'a> {
    pub fn new(
        item: &'a InputItem,
        surface: Surface,
        selection: ResourceOperation,
        fields: &'static [FieldSpec],
    ) -> Self {
        Self {
            item,
            surface,
            selection,
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Result<&'static FieldSpec, ParamError> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| ParamError::Undeclared {
                name: name.to_string(),
                surface: self.surface,
                resource: self.selection.resource,
                operation: self.selection.operation,
            })
    }

    /// Resolved value for a declared field.
    ///
    /// Returns the coerced item value when present, else the declared default.
    /// Blank strings count as absent.
    /// A required field with no usable value is [`ParamError::Missing`]; an
    /// optional field with no default resolves to `Null`.
    pub fn get(&self, name: &str) -> Result<JsonValue, ParamError> {
        let field = self.field(name)?;
        match self.raw(field) {
            Some(raw) => {
                let v = coerce(field, raw)?;
                if field.required && crate::derive::is_empty_value(&v) {
                    return Err(ParamError::Missing {
                        name: field.name.to_string(),
                    });
                }
                Ok(v)
            }
            None => match field.default.to_value() {
                Some(d) if !field.required => Ok(d),
                _ if field.required => Err(ParamError::Missing {
                    name: field.name.to_string(),
                }),
                _ => Ok(JsonValue::Null),
            },
        }
    }

    fn raw(&self, field: &FieldSpec) -> Option<&'a JsonValue> {
        let v = match field.collection {
            Some(collection) => self.item.get(collection)?.as_object()?.get(field.name)?,
            None => self.item.get(field.name)?,
        };
        match v {
            JsonValue::Null => None,
            JsonValue::String(s) if s.trim().is_empty() => None,
            _ => Some(v),
        }
    }
}

fn coerce(field: &FieldSpec, raw: &JsonValue) -> Result<JsonValue, ParamError> {
    let type_err = || ParamError::Type {
        name: field.name.to_string(),
        expected: field.kind,
        found: describe(raw).to_string(),
    };
    match field.kind {
        FieldKind::String => match raw {
            JsonValue::String(_) => Ok(raw.clone()),
            JsonValue::Number(n) => Ok(JsonValue::String(n.to_string())),
            JsonValue::Bool(b) => Ok(JsonValue::String(b.to_string())),
            _ => Err(type_err()),
        },
        FieldKind::Number => match raw {
            JsonValue::Number(_) => Ok(raw.clone()),
            JsonValue::String(s) => parse_number(s.trim()).ok_or_else(type_err),
            _ => Err(type_err()),
        },
        FieldKind::Boolean => match raw {
            JsonValue::Bool(_) => Ok(raw.clone()),
            JsonValue::String(s) => match s.trim() {
                "true" => Ok(JsonValue::Bool(true)),
                "false" => Ok(JsonValue::Bool(false)),
                _ => Err(type_err()),
            },
            _ => Err(type_err()),
        },
        FieldKind::Options => match raw {
            JsonValue::String(s) => {
                ensure_option(field, s)?;
                Ok(raw.clone())
            }
            _ => Err(type_err()),
        },
        FieldKind::MultiOptions => {
            let values: Vec<String> = match raw {
                JsonValue::Array(items) => items
                    .iter()
                    .map(|v| v.as_str().map(str::to_string).ok_or_else(type_err))
                    .collect::<Result<_, _>>()?,
                JsonValue::String(s) => split_list(s),
                _ => return Err(type_err()),
            };
            for v in &values {
                ensure_option(field, v)?;
            }
            Ok(JsonValue::Array(
                values.into_iter().map(JsonValue::String).collect(),
            ))
        }
    }
}

fn ensure_option(field: &FieldSpec, value: &str) -> Result<(), ParamError> {
    if field.options.contains(&value) {
        return Ok(());
    }
    Err(ParamError::InvalidOption {
        name: field.name.to_string(),
        value: value.to_string(),
        allowed: field.options.iter().map(|o| o.to_string()).collect(),
    })
}

fn parse_number(s: &str) -> Option<JsonValue> {
    if let Ok(i) = s.parse::<i64>() {
        return Some(JsonValue::from(i));
    }
    let f = s.parse::<f64>().ok()?;
    serde_json::Number::from_f64(f).map(JsonValue::Number)
}

fn describe(v: &JsonValue) -> &'static str {
    match v {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::catalog::fields_for;
    use crate::types::{Operation, Resource};

    fn item(v: JsonValue) -> InputItem {
        InputItem::new(0, v.as_object().cloned().unwrap_or_default())
    }

    fn params<'a>(it: &'a InputItem, r: Resource, o: Operation) -> ItemParams<'a> {
        let sel = ResourceOperation::new(r, o);
        ItemParams::new(it, Surface::Query, sel, fields_for(Surface::Query, sel).unwrap())
    }

    #[test]
    fn defaults_apply_when_absent() {
        let it = item(json!({"user": "john-doe"}));
        let p = params(&it, Resource::User, Operation::GetProfile);
        assert_eq!(p.get("withSkills").unwrap(), json!(true));
        assert_eq!(p.get("user").unwrap(), json!("john-doe"));
    }

    #[test]
    fn required_field_missing_or_blank_fails() {
        let it = item(json!({}));
        let p = params(&it, Resource::User, Operation::GetProfile);
        assert_eq!(
            p.get("user").unwrap_err(),
            ParamError::Missing { name: "user".into() }
        );

        let it = item(json!({"user": ""}));
        let p = params(&it, Resource::User, Operation::GetProfile);
        assert!(matches!(p.get("user"), Err(ParamError::Missing { .. })));

        let it = item(json!({"user": "   "}));
        let p = params(&it, Resource::User, Operation::GetProfile);
        assert!(matches!(p.get("user"), Err(ParamError::Missing { .. })));
    }

    #[test]
    fn blank_optional_values_fall_back_to_defaults() {
        let it = item(json!({"urn": "fsd_profile:1", "count": "", "timeout": " "}));
        let p = params(&it, Resource::User, Operation::GetPosts);
        assert_eq!(p.get("count").unwrap(), json!(10));
        assert_eq!(p.get("timeout").unwrap(), json!(300));

        let it = item(json!({"additionalFilters": {"sort": "", "work_types": ""}}));
        let p = params(&it, Resource::Search, Operation::SearchJobs);
        assert_eq!(p.get("sort").unwrap(), JsonValue::Null);
        assert_eq!(p.get("work_types").unwrap(), JsonValue::Null);
    }

    #[test]
    fn numbers_and_booleans_coerce_from_strings() {
        let it = item(json!({"urn": "fsd_profile:1", "count": "25"}));
        let p = params(&it, Resource::User, Operation::GetPosts);
        assert_eq!(p.get("count").unwrap(), json!(25));

        let it = item(json!({"user": "x", "withEducation": "false"}));
        let p = params(&it, Resource::User, Operation::GetProfile);
        assert_eq!(p.get("withEducation").unwrap(), json!(false));

        let it = item(json!({"urn": "fsd_profile:1", "count": "many"}));
        let p = params(&it, Resource::User, Operation::GetPosts);
        assert!(matches!(p.get("count"), Err(ParamError::Type { .. })));
    }

    #[test]
    fn options_are_checked_against_declared_values() {
        let it = item(json!({"urn": "activity:1", "sort": "oldest"}));
        let p = params(&it, Resource::Post, Operation::GetPostComments);
        let err = p.get("sort").unwrap_err();
        assert!(err.to_string().contains("relevance, recent"), "{err}");
    }

    #[test]
    fn collection_members_read_from_their_collection() {
        let it = item(json!({
            "first_name": "ignored",
            "additionalFields": {"first_name": "Ada"}
        }));
        let p = params(&it, Resource::User, Operation::Search);
        assert_eq!(p.get("first_name").unwrap(), json!("Ada"));
        assert_eq!(p.get("title").unwrap(), JsonValue::Null);
    }

    #[test]
    fn multi_options_accept_lists_and_comma_strings() {
        let it = item(json!({"additionalFilters": {"work_types": "remote, hybrid"}}));
        let p = params(&it, Resource::Search, Operation::SearchJobs);
        assert_eq!(p.get("work_types").unwrap(), json!(["remote", "hybrid"]));
    }

    #[test]
    fn undeclared_names_are_an_error() {
        let it = item(json!({"targetUser": "x"}));
        let p = params(&it, Resource::User, Operation::GetProfile);
        assert!(matches!(p.get("targetUser"), Err(ParamError::Undeclared { .. })));
    }
}
