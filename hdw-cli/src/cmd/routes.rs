use hdw_core::routing::{table_for, FieldSource, Inclusion};
use hdw_core::Surface;
use serde::Serialize;

use crate::exit_codes;
use crate::output::{print_result, OutputFormat};
use crate::{OutputArgs, SurfaceArg};

#[derive(Serialize)]
struct RouteRow {
    surface: &'static str,
    resource: &'static str,
    operation: &'static str,
    method: &'static str,
    path: &'static str,
    body: Vec<BodyKey>,
}

#[derive(Serialize)]
struct BodyKey {
    key: &'static str,
    source: String,
    optional: bool,
}

pub fn routes_cmd(surface: Option<SurfaceArg>, output: OutputArgs) -> i32 {
    let surfaces: Vec<Surface> = match surface {
        Some(s) => vec![s.into()],
        None => Surface::ALL.to_vec(),
    };

    let mut rows = Vec::new();
    for surface in surfaces {
        let table = table_for(surface);
        for route in table.routes {
            rows.push(RouteRow {
                surface: surface.as_str(),
                resource: route.selection.resource.as_str(),
                operation: route.selection.operation.as_str(),
                method: "POST",
                path: route.path,
                body: table
                    .seed
                    .iter()
                    .chain(route.fields)
                    .map(|f| BodyKey {
                        key: f.key,
                        source: describe_source(f.source),
                        optional: f.inclusion == Inclusion::IfNonEmpty,
                    })
                    .collect(),
            });
        }
    }

    match output.format {
        OutputFormat::Json => print_result(output.format, output.quiet, &rows),
        OutputFormat::Text if !output.quiet => {
            for row in &rows {
                println!(
                    "{:<10} {:<34} {} {}",
                    row.surface,
                    format!("{}/{}", row.resource, row.operation),
                    row.method,
                    row.path
                );
            }
        }
        OutputFormat::Text => {}
    }
    exit_codes::SUCCESS
}

fn describe_source(source: FieldSource) -> String {
    match source {
        FieldSource::Param(n) => n.to_string(),
        FieldSource::SplitList(n) => format!("list({n})"),
        FieldSource::ScalarOrList(n) => format!("scalar_or_list({n})"),
        FieldSource::AccountId => "credentials.account_id".to_string(),
    }
}
