use std::path::PathBuf;

use clap::Subcommand;

use crate::args::*;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send one request per item and print the results.
    Run {
        /// JSON or YAML file: an array of parameter objects, or a single object.
        items: PathBuf,
        #[command(flatten)]
        selection: SelectionArgs,
        #[arg(long)]
        continue_on_fail: bool,
        #[command(flatten)]
        connection: ConnectionArgs,
        #[arg(long, value_enum, default_value_t = EventsArg::None)]
        events: EventsArg,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Build every request without sending anything.
    Plan {
        items: PathBuf,
        #[command(flatten)]
        selection: SelectionArgs,
        #[arg(long)]
        account_id: Option<String>,
        #[arg(long)]
        credentials: Option<PathBuf>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List endpoint routes.
    Routes {
        #[arg(long, value_enum)]
        surface: Option<SurfaceArg>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Describe the parameters of one operation.
    Fields {
        #[arg(long, value_enum)]
        surface: SurfaceArg,
        #[arg(long)]
        resource: String,
        #[arg(long)]
        operation: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Check that parameter catalog and routing tables agree.
    Check {
        #[command(flatten)]
        output: OutputArgs,
    },
}

impl Command {
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Command::Run {
                events: EventsArg::Log,
                ..
            } => "info",
            _ => "warn",
        }
    }
}
