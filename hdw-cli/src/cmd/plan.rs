use std::path::Path;

use hdw_core::{RequestBuilder, Surface};
use hdw_exec::credentials::CredentialsProvider;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::exit_codes;
use crate::output::{print_error, print_result};
use crate::{OutputArgs, SelectionArgs};

#[derive(Serialize)]
struct PlannedRequest {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    method: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct PlanResult {
    surface: &'static str,
    valid: bool,
    requests: Vec<PlannedRequest>,
}

pub async fn plan_cmd(
    items_path: &Path,
    selection: SelectionArgs,
    account_id: Option<&str>,
    credentials_path: Option<&Path>,
    output: OutputArgs,
) -> i32 {
    let values = match super::config::load_items(items_path, &output) {
        Ok(v) => v,
        Err(code) => return code,
    };
    let items = match super::config::build_items(values, &selection) {
        Ok(items) => items,
        Err(e) => {
            print_error(output.format, output.quiet, &e);
            return exit_codes::VALIDATION_FAILED;
        }
    };

    let surface: Surface = selection.surface.into();
    let account_id = match account_id {
        Some(a) => Some(a.to_string()),
        None if surface == Surface::Management => {
            match super::config::credentials_provider(credentials_path).load().await {
                Ok(creds) => creds.account_id,
                Err(e) => {
                    print_error(output.format, output.quiet, &e.to_string());
                    return exit_codes::VALIDATION_FAILED;
                }
            }
        }
        None => None,
    };

    let builder = RequestBuilder::for_surface(surface);
    let requests: Vec<PlannedRequest> = items
        .iter()
        .map(|item| match builder.build(item, account_id.as_deref()) {
            Ok(spec) => PlannedRequest {
                index: item.index,
                method: Some(spec.method),
                path: Some(spec.path),
                body: Some(spec.body_json()),
                error: None,
            },
            Err(e) => PlannedRequest {
                index: item.index,
                method: None,
                path: None,
                body: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    let valid = requests.iter().all(|r| r.error.is_none());
    print_result(
        output.format,
        output.quiet,
        &PlanResult {
            surface: surface.as_str(),
            valid,
            requests,
        },
    );
    if valid {
        exit_codes::SUCCESS
    } else {
        exit_codes::VALIDATION_FAILED
    }
}
