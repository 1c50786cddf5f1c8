use std::path::Path;
use std::sync::Arc;

use hdw_exec::executor::{ExecutionError, Executor, ReqwestHttpClient};
use hdw_exec::BatchOutput;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::exit_codes;
use crate::output::{print_error, print_result};
use crate::{ConnectionArgs, EventsArg, OutputArgs, SelectionArgs};

#[derive(Serialize)]
struct RunResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    batch_id: Option<String>,
    status: &'static str,
    succeeded: usize,
    failed: usize,
    records: Vec<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl RunResult {
    fn finished(out: BatchOutput) -> Self {
        Self {
            batch_id: Some(out.batch_id.to_string()),
            status: if out.has_failures() {
                "completed_with_errors"
            } else {
                "succeeded"
            },
            succeeded: out.succeeded,
            failed: out.failed,
            records: out.records.into_iter().map(|r| r.json).collect(),
            error: None,
        }
    }
}

pub async fn run_cmd(
    items_path: &Path,
    selection: SelectionArgs,
    continue_on_fail: bool,
    connection: ConnectionArgs,
    events: EventsArg,
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

    let http = match ReqwestHttpClient::new() {
        Ok(c) => c,
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            return exit_codes::RUNTIME_ERROR;
        }
    };
    let config = super::config::build_executor_config(&connection, continue_on_fail);
    tracing::debug!(base_url = %config.base_url, items = items.len(), "starting batch");

    let executor = Executor::new(
        config,
        Arc::new(http),
        super::config::credentials_provider(connection.credentials.as_deref()),
        super::config::event_sink(events),
    );

    match executor.run_batch(selection.surface.into(), &items).await {
        Ok(out) => {
            let failed = out.has_failures();
            print_result(output.format, output.quiet, &RunResult::finished(out));
            if failed {
                exit_codes::RUN_FAILED
            } else {
                exit_codes::SUCCESS
            }
        }
        Err(ExecutionError::Credentials(e)) => {
            print_error(output.format, output.quiet, &e.to_string());
            exit_codes::VALIDATION_FAILED
        }
        Err(ExecutionError::Aborted(e)) => {
            let message = e.to_string();
            let succeeded = e.records.len();
            let result = RunResult {
                batch_id: None,
                status: "aborted",
                succeeded,
                failed: 1,
                records: e.records.into_iter().map(|r| r.json).collect(),
                error: Some(message.clone()),
            };
            print_result(output.format, output.quiet, &result);
            print_error(output.format, output.quiet, &message);
            exit_codes::RUN_FAILED
        }
    }
}
