use hdw_core::check_tables;
use serde::Serialize;

use crate::exit_codes;
use crate::output::print_result;
use crate::OutputArgs;

#[derive(Serialize)]
struct CheckResult {
    valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

pub fn check_cmd(output: OutputArgs) -> i32 {
    match check_tables() {
        Ok(()) => {
            print_result(
                output.format,
                output.quiet,
                &CheckResult {
                    valid: true,
                    errors: Vec::new(),
                },
            );
            exit_codes::SUCCESS
        }
        Err(e) => {
            let errors = e
                .violations
                .iter()
                .map(|v| format!("{}: {}", v.path, v.message))
                .collect();
            print_result(
                output.format,
                output.quiet,
                &CheckResult {
                    valid: false,
                    errors,
                },
            );
            exit_codes::VALIDATION_FAILED
        }
    }
}
