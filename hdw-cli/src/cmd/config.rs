use std::path::Path;
use std::sync::Arc;

use hdw_core::InputItem;
use hdw_exec::credentials::{
    CompositeCredentialsProvider, CredentialsProvider, EnvCredentialsProvider,
    FileCredentialsProvider,
};
use hdw_exec::executor::{
    EventSink, ExecutorConfig, NoOpEventSink, StdoutEventSink, TracingEventSink,
};
use serde_json::{Map, Value as JsonValue};

use crate::exit_codes;
use crate::output::print_error;
use crate::{ConnectionArgs, EventsArg, OutputArgs, SelectionArgs};

pub const BASE_URL_ENV: &str = "HDW_BASE_URL";

/// Reads the items file. Errors are printed; the return value is the exit code to use.
pub fn load_items(path: &Path, output: &OutputArgs) -> Result<Vec<JsonValue>, i32> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            print_error(
                output.format,
                output.quiet,
                &format!("failed to read {}: {e}", path.display()),
            );
            return Err(exit_codes::RUNTIME_ERROR);
        }
    };
    let parsed: Option<JsonValue> = serde_json::from_str(&content)
        .ok()
        .or_else(|| serde_yaml::from_str(&content).ok());
    match parsed {
        Some(JsonValue::Array(items)) => Ok(items),
        Some(v @ JsonValue::Object(_)) => Ok(vec![v]),
        Some(_) => {
            print_error(
                output.format,
                output.quiet,
                "items file must hold an object or an array of objects",
            );
            Err(exit_codes::VALIDATION_FAILED)
        }
        None => {
            print_error(
                output.format,
                output.quiet,
                "items file is neither valid JSON nor YAML",
            );
            Err(exit_codes::VALIDATION_FAILED)
        }
    }
}

/// Parses `KEY=VALUE` pairs. Values are kept as strings; the catalog coerces them.
pub fn parse_set_params(set_params: &[String]) -> Result<Map<String, JsonValue>, String> {
    let mut map = Map::new();
    for s in set_params {
        let Some((k, v)) = s.split_once('=') else {
            return Err(format!("invalid --set value {s:?} (expected KEY=VALUE)"));
        };
        map.insert(k.trim().to_string(), JsonValue::String(v.to_string()));
    }
    Ok(map)
}

/// Applies `--resource`, `--operation` and `--set` defaults beneath each item's own params.
pub fn build_items(
    values: Vec<JsonValue>,
    selection: &SelectionArgs,
) -> Result<Vec<InputItem>, String> {
    let mut defaults = parse_set_params(&selection.set_params)?;
    if let Some(r) = &selection.resource {
        defaults.insert("resource".to_string(), JsonValue::String(r.clone()));
    }
    if let Some(o) = &selection.operation {
        defaults.insert("operation".to_string(), JsonValue::String(o.clone()));
    }

    let mut items = InputItem::from_values(values);
    for item in &mut items {
        for (k, v) in &defaults {
            if !item.params.contains_key(k) {
                item.params.insert(k.clone(), v.clone());
            }
        }
    }
    Ok(items)
}

pub fn credentials_provider(path: Option<&Path>) -> Arc<dyn CredentialsProvider> {
    let mut providers: Vec<Box<dyn CredentialsProvider>> = Vec::new();
    if let Some(p) = path {
        providers.push(Box::new(FileCredentialsProvider::new(p)));
    }
    providers.push(Box::new(EnvCredentialsProvider::default()));
    Arc::new(CompositeCredentialsProvider::new(providers))
}

pub fn build_executor_config(connection: &ConnectionArgs, continue_on_fail: bool) -> ExecutorConfig {
    let base_url = connection
        .base_url
        .clone()
        .or_else(|| std::env::var(BASE_URL_ENV).ok().filter(|v| !v.trim().is_empty()));
    let defaults = ExecutorConfig::default();
    ExecutorConfig {
        base_url: base_url.unwrap_or(defaults.base_url),
        continue_on_fail,
        auth_header: connection.auth_header.clone(),
        max_response_bytes: connection.max_response_bytes,
    }
}

pub fn event_sink(events: EventsArg) -> Arc<dyn EventSink> {
    match events {
        EventsArg::None => Arc::new(NoOpEventSink),
        EventsArg::Stdout => Arc::new(StdoutEventSink),
        EventsArg::Log => Arc::new(TracingEventSink),
    }
}
