use hdw_core::catalog::{catalog_for, operations};
use hdw_core::routing::table_for;
use hdw_core::{
    check_tables, BuildError, InputItem, ParamError, RequestBuilder, ResourceOperation, Surface,
};
use serde_json::{json, Map, Value as JsonValue};

fn item(v: JsonValue) -> InputItem {
    InputItem::new(0, v.as_object().cloned().unwrap_or_default())
}

#[test]
fn tables_pass_consistency_check() {
    check_tables().unwrap();
}

#[test]
fn get_profile_fills_defaults() {
    let builder = RequestBuilder::for_surface(Surface::Query);
    let spec = builder
        .build(
            &item(json!({
                "resource": "user",
                "operation": "getProfile",
                "user": "john-doe",
                "withExperience": true
            })),
            None,
        )
        .unwrap();

    assert_eq!(spec.method, "POST");
    assert_eq!(spec.path, "/api/linkedin/user");
    assert_eq!(
        spec.body_json(),
        json!({
            "user": "john-doe",
            "with_experience": true,
            "with_education": true,
            "with_skills": true
        })
    );
}

#[test]
fn company_employees_splits_companies() {
    let builder = RequestBuilder::for_surface(Surface::Query);
    let spec = builder
        .build(
            &item(json!({
                "resource": "company",
                "operation": "getCompanyEmployees",
                "companies": "company:1,company:2"
            })),
            None,
        )
        .unwrap();

    assert_eq!(spec.path, "/api/linkedin/company/employees");
    assert_eq!(spec.body["companies"], json!(["company:1", "company:2"]));
    assert_eq!(spec.body["keywords"], json!(""));
    assert_eq!(spec.body["first_name"], json!(""));
    assert_eq!(spec.body["count"], json!(10));
}

#[test]
fn conversations_omit_empty_filters() {
    let builder = RequestBuilder::for_surface(Surface::Management);
    let spec = builder
        .build(
            &item(json!({
                "resource": "chat",
                "operation": "getConversations",
                "company": "",
                "connectedAfter": "",
                "count": 20
            })),
            Some("acc-42"),
        )
        .unwrap();

    assert_eq!(spec.path, "/api/linkedin/management/conversations");
    assert_eq!(
        spec.body_json(),
        json!({"timeout": 300, "account_id": "acc-42", "count": 20})
    );
}

#[test]
fn conversations_send_target_user_when_given() {
    let builder = RequestBuilder::for_surface(Surface::Management);
    let spec = builder
        .build(
            &item(json!({
                "resource": "chat",
                "operation": "getConversations",
                "company": "company:1441",
                "connectedAfter": 1700000000,
                "targetUser": "fsd_profile:ACoAA1"
            })),
            Some("acc-42"),
        )
        .unwrap();

    assert_eq!(spec.body["company"], json!("company:1441"));
    assert_eq!(spec.body["connected_after"], json!(1700000000));
    assert_eq!(spec.body["target_user"], json!("fsd_profile:ACoAA1"));
}

#[test]
fn create_post_uses_option_defaults() {
    let builder = RequestBuilder::for_surface(Surface::Management);
    let spec = builder
        .build(
            &item(json!({"resource": "post", "operation": "createPost", "text": "hello"})),
            Some("acc-1"),
        )
        .unwrap();
    assert_eq!(
        spec.body_json(),
        json!({
            "timeout": 300,
            "account_id": "acc-1",
            "text": "hello",
            "visibility": "ANYONE",
            "comment_scope": "ALL"
        })
    );
}

#[test]
fn google_company_search_splits_keywords() {
    let builder = RequestBuilder::for_surface(Surface::Query);
    let spec = builder
        .build(
            &item(json!({
                "resource": "google",
                "operation": "searchCompanies",
                "keywords": "openai, anthropic"
            })),
            None,
        )
        .unwrap();
    assert_eq!(spec.path, "/api/linkedin/google/company");
    assert_eq!(
        spec.body_json(),
        json!({
            "keywords": ["openai", "anthropic"],
            "with_urn": false,
            "count_per_keyword": 1,
            "timeout": 300
        })
    );
}

#[test]
fn user_search_sends_only_supplied_extra_fields() {
    let builder = RequestBuilder::for_surface(Surface::Query);
    let spec = builder
        .build(
            &item(json!({
                "resource": "user",
                "operation": "search",
                "keywords": "rust",
                "additionalFields": {"title": "engineer", "location": ""}
            })),
            None,
        )
        .unwrap();
    assert_eq!(
        spec.body_json(),
        json!({"keywords": "rust", "count": 10, "timeout": 300, "title": "engineer"})
    );
}

#[test]
fn missing_required_field_is_a_param_error() {
    let builder = RequestBuilder::for_surface(Surface::Query);
    let err = builder
        .build(&item(json!({"resource": "email", "operation": "getUserByEmail"})), None)
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::Param(ParamError::Missing {
            name: "email".to_string()
        })
    );
}

#[test]
fn blank_optional_filter_is_skipped() {
    let builder = RequestBuilder::for_surface(Surface::Query);
    let spec = builder
        .build(
            &item(json!({
                "resource": "search",
                "operation": "searchJobs",
                "keywords": "rust",
                "additionalFilters": {"sort": "", "work_types": "  "}
            })),
            None,
        )
        .unwrap();
    assert_eq!(
        spec.body_json(),
        json!({"keywords": "rust", "count": 10, "timeout": 300})
    );
}

#[test]
fn blank_numbers_use_their_defaults() {
    let builder = RequestBuilder::for_surface(Surface::Query);
    let spec = builder
        .build(
            &item(json!({
                "resource": "user",
                "operation": "getPosts",
                "urn": "x",
                "count": ""
            })),
            None,
        )
        .unwrap();
    assert_eq!(spec.body_json(), json!({"urn": "x", "count": 10, "timeout": 300}));
}

#[test]
fn whitespace_only_required_value_is_missing() {
    let builder = RequestBuilder::for_surface(Surface::Query);
    let err = builder
        .build(
            &item(json!({"resource": "user", "operation": "getProfile", "user": "   "})),
            None,
        )
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::Param(ParamError::Missing {
            name: "user".to_string()
        })
    );
}

#[test]
fn commas_are_only_split_in_list_fields() {
    let builder = RequestBuilder::for_surface(Surface::Query);
    let spec = builder
        .build(
            &item(json!({
                "resource": "search",
                "operation": "searchJobs",
                "keywords": "rust, tokio",
                "additionalFilters": {
                    "location": "Berlin, Germany",
                    "company": "company:1, company:2"
                }
            })),
            None,
        )
        .unwrap();
    assert_eq!(spec.body["keywords"], json!("rust, tokio"));
    assert_eq!(spec.body["location"], json!("Berlin, Germany"));
    assert_eq!(spec.body["company"], json!(["company:1", "company:2"]));

    let builder = RequestBuilder::for_surface(Surface::Management);
    let spec = builder
        .build(
            &item(json!({
                "resource": "chat",
                "operation": "sendMessage",
                "user": "fsd_profile:ACoAA1",
                "text": "Hi, there"
            })),
            Some("acc-1"),
        )
        .unwrap();
    assert_eq!(spec.body["text"], json!("Hi, there"));
}

/// Minimal params satisfying every required field of an operation.
fn required_params(surface: Surface, selection: ResourceOperation) -> Map<String, JsonValue> {
    let mut params = Map::new();
    params.insert("resource".into(), json!(selection.resource.as_str()));
    params.insert("operation".into(), json!(selection.operation.as_str()));
    let entry = catalog_for(surface)
        .iter()
        .find(|e| e.selection == selection)
        .unwrap();
    for field in entry.fields.iter().filter(|f| f.required) {
        params.insert(field.name.into(), json!(format!("value-{}", field.name)));
    }
    params
}

#[test]
fn every_catalog_pair_builds_with_a_path_and_its_required_fields() {
    for surface in Surface::ALL {
        let builder = RequestBuilder::for_surface(surface);
        let table = table_for(surface);
        for selection in operations(surface) {
            let route = table.route(selection).unwrap();
            let it = InputItem::new(0, required_params(surface, selection));
            let spec = builder.build(&it, Some("acc")).unwrap();
            assert!(!spec.path.is_empty(), "{surface} {selection}");
            assert_eq!(spec.path, route.path);

            for body_field in route.fields {
                let Some(name) = body_field.source.param_name() else {
                    continue;
                };
                if it.get(name).is_some() {
                    assert!(
                        spec.body.contains_key(body_field.key),
                        "{surface} {selection}: {} missing",
                        body_field.key
                    );
                }
            }
        }
    }
}

#[test]
fn route_counts_match_catalog() {
    assert_eq!(table_for(Surface::Query).routes.len(), 18);
    assert_eq!(table_for(Surface::Management).routes.len(), 8);
    assert_eq!(operations(Surface::Query).count(), 18);
    assert_eq!(operations(Surface::Management).count(), 8);
}
