use serde_json::{Map, Value as JsonValue};

use super::{table_for, BodyField, FieldSource, Inclusion, Route, RoutingTable};
use crate::catalog::{fields_for, ItemParams};
use crate::derive::{is_empty_value, scalar_or_list, split_list};
use crate::error::{BuildError, RouteError};
use crate::types::{InputItem, Operation, RequestSpec, Resource, ResourceOperation, Surface};

/// Reads the `resource` and `operation` selectors of an item.
pub fn selection_of(item: &InputItem) -> Result<ResourceOperation, RouteError> {
    let resource: Resource = selector(item, "resource")?.parse()?;
    let operation: Operation = selector(item, "operation")?.parse()?;
    Ok(ResourceOperation::new(resource, operation))
}

fn selector<'a>(item: &'a InputItem, name: &'static str) -> Result<&'a str, RouteError> {
    item.get(name)
        .and_then(JsonValue::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(RouteError::MissingSelector(name))
}

/// Turns input items into [`RequestSpec`]s using one surface's routing table.
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder {
    table: &'static RoutingTable,
}

impl RequestBuilder {
    pub fn new(table: &'static RoutingTable) -> Self {
        Self { table }
    }

    pub fn for_surface(surface: Surface) -> Self {
        Self::new(table_for(surface))
    }

    pub fn route(&self, selection: ResourceOperation) -> Result<&'static Route, RouteError> {
        self.table
            .route(selection)
            .ok_or_else(|| self.unmapped(selection))
    }

    fn unmapped(&self, selection: ResourceOperation) -> RouteError {
        RouteError::Unmapped {
            surface: self.table.surface,
            resource: selection.resource,
            operation: selection.operation,
        }
    }

    /// Builds the request for an item, taking the selection from its params.
    pub fn build(
        &self,
        item: &InputItem,
        account_id: Option<&str>,
    ) -> Result<RequestSpec, BuildError> {
        let selection = selection_of(item)?;
        self.build_for(selection, item, account_id)
    }

    pub fn build_for(
        &self,
        selection: ResourceOperation,
        item: &InputItem,
        account_id: Option<&str>,
    ) -> Result<RequestSpec, BuildError> {
        let route = self.route(selection)?;
        let fields =
            fields_for(self.table.surface, selection).ok_or_else(|| self.unmapped(selection))?;
        let params = ItemParams::new(item, self.table.surface, selection, fields);

        let mut body = Map::new();
        for field in self.table.seed.iter().chain(route.fields) {
            if let Some(value) = self.evaluate(field, &params, account_id)? {
                body.insert(field.key.to_string(), value);
            }
        }
        Ok(RequestSpec::post(route.path, body))
    }

    fn evaluate(
        &self,
        field: &BodyField,
        params: &ItemParams<'_>,
        account_id: Option<&str>,
    ) -> Result<Option<JsonValue>, BuildError> {
        let value = match field.source {
            FieldSource::AccountId => match account_id.filter(|a| !a.is_empty()) {
                Some(id) => JsonValue::String(id.to_string()),
                None => {
                    return Err(BuildError::MissingAccountId {
                        surface: self.table.surface,
                    })
                }
            },
            FieldSource::Param(name)
            | FieldSource::SplitList(name)
            | FieldSource::ScalarOrList(name) => params.get(name)?,
        };

        if field.inclusion == Inclusion::IfNonEmpty && is_empty_value(&value) {
            return Ok(None);
        }

        let value = match (field.source, value) {
            (FieldSource::SplitList(_), JsonValue::String(s)) => {
                JsonValue::Array(split_list(&s).into_iter().map(JsonValue::String).collect())
            }
            (FieldSource::ScalarOrList(_), JsonValue::String(s)) => scalar_or_list(&s),
            (_, v) => v,
        };
        Ok(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn item(v: JsonValue) -> InputItem {
        InputItem::new(0, v.as_object().cloned().unwrap_or_default())
    }

    #[test]
    fn selectors_are_required() {
        let err = selection_of(&item(json!({"operation": "getProfile"}))).unwrap_err();
        assert_eq!(err, RouteError::MissingSelector("resource"));

        let err = selection_of(&item(json!({"resource": "user", "operation": "nope"}))).unwrap_err();
        assert_eq!(err.to_string(), "unknown operation: nope");
    }

    #[test]
    fn pairs_outside_the_surface_are_unmapped() {
        let builder = RequestBuilder::for_surface(Surface::Query);
        let err = builder
            .build(&item(json!({"resource": "chat", "operation": "getMessages"})), None)
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::Route(RouteError::Unmapped {
                surface: Surface::Query,
                resource: Resource::Chat,
                operation: Operation::GetMessages,
            })
        );
        assert_eq!(err.to_string(), "no query route for chat/getMessages");
    }

    #[test]
    fn management_seed_needs_an_account_id() {
        let builder = RequestBuilder::for_surface(Surface::Management);
        let it = item(json!({"resource": "user", "operation": "getMe"}));
        assert_eq!(
            builder.build(&it, None).unwrap_err(),
            BuildError::MissingAccountId {
                surface: Surface::Management
            }
        );
        let spec = builder.build(&it, Some("acc-1")).unwrap();
        assert_eq!(spec.body_json(), json!({"timeout": 300, "account_id": "acc-1"}));
    }

    #[test]
    fn empty_split_filters_are_omitted() {
        let builder = RequestBuilder::for_surface(Surface::Query);
        let it = item(json!({
            "resource": "search",
            "operation": "salesNavigatorSearch",
            "additionalFilters": {"first_names": "", "last_names": "Lovelace, Hopper"}
        }));
        let spec = builder.build(&it, None).unwrap();
        assert!(!spec.body.contains_key("first_names"));
        assert_eq!(spec.body["last_names"], json!(["Lovelace", "Hopper"]));
    }

    #[test]
    fn job_company_filter_is_scalar_or_list() {
        let builder = RequestBuilder::for_surface(Surface::Query);
        let single = item(json!({
            "resource": "search",
            "operation": "searchJobs",
            "additionalFilters": {"company": "company:1441"}
        }));
        let many = item(json!({
            "resource": "search",
            "operation": "searchJobs",
            "additionalFilters": {"company": "company:1441, company:1035"}
        }));
        assert_eq!(builder.build(&single, None).unwrap().body["company"], json!("company:1441"));
        assert_eq!(
            builder.build(&many, None).unwrap().body["company"],
            json!(["company:1441", "company:1035"])
        );
    }
}
