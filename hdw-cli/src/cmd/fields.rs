use hdw_core::catalog::{fields_for, FieldSpec};
use hdw_core::{Operation, Resource, ResourceOperation, Surface};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};
use crate::{OutputArgs, SurfaceArg};

#[derive(Serialize)]
struct FieldRow {
    name: &'static str,
    display_name: &'static str,
    kind: &'static str,
    required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<JsonValue>,
    #[serde(skip_serializing_if = "no_options")]
    options: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    collection: Option<&'static str>,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
}

fn no_options(options: &&'static [&'static str]) -> bool {
    options.is_empty()
}

impl From<&FieldSpec> for FieldRow {
    fn from(f: &FieldSpec) -> Self {
        Self {
            name: f.name,
            display_name: f.display_name,
            kind: f.kind.as_str(),
            required: f.required,
            default: f.default.to_value(),
            options: f.options,
            collection: f.collection,
            description: f.description,
        }
    }
}

pub fn fields_cmd(surface: SurfaceArg, resource: &str, operation: &str, output: OutputArgs) -> i32 {
    let surface: Surface = surface.into();
    let selection = match (resource.parse::<Resource>(), operation.parse::<Operation>()) {
        (Ok(r), Ok(o)) => ResourceOperation::new(r, o),
        (Err(e), _) | (_, Err(e)) => {
            print_error(output.format, output.quiet, &e.to_string());
            return exit_codes::VALIDATION_FAILED;
        }
    };
    let Some(fields) = fields_for(surface, selection) else {
        print_error(
            output.format,
            output.quiet,
            &format!("{surface} surface has no operation {selection}"),
        );
        return exit_codes::VALIDATION_FAILED;
    };

    let rows: Vec<FieldRow> = fields.iter().map(FieldRow::from).collect();
    match output.format {
        OutputFormat::Json => print_result(output.format, output.quiet, &rows),
        OutputFormat::Text if !output.quiet => {
            for row in &rows {
                let name = match row.collection {
                    Some(c) => format!("{c}.{}", row.name),
                    None => row.name.to_string(),
                };
                let mut line = format!("{name:<36} {:<12}", row.kind);
                if row.required {
                    line.push_str(" required");
                }
                if let Some(d) = &row.default {
                    line.push_str(&format!(" default={d}"));
                }
                if !row.options.is_empty() {
                    line.push_str(&format!(" [{}]", row.options.join("|")));
                }
                println!("{}", line.trim_end());
            }
        }
        OutputFormat::Text => {}
    }
    exit_codes::SUCCESS
}
