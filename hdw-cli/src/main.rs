use clap::Parser;
use tracing_subscriber::EnvFilter;

mod args;
mod cmd;
mod commands;
mod exit_codes;
mod output;

pub use args::*;
use commands::Command;

#[derive(Debug, Parser)]
#[command(name = "hdw", version, about = "Horizon Data Wave LinkedIn API dispatcher")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.command.default_log_level());

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to create tokio runtime: {e}");
            std::process::exit(exit_codes::RUNTIME_ERROR);
        }
    };

    let exit_code = rt.block_on(run_command(cli.command));
    std::process::exit(exit_code);
}

/// Logs go to stderr. `HDW_LOG` takes precedence over `RUST_LOG`.
fn init_tracing(default_level: &str) {
    let filter = std::env::var("HDW_LOG")
        .ok()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level));
    // A global subscriber may already be set when embedded or under test.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run_command(command: Command) -> i32 {
    match command {
        Command::Run {
            items,
            selection,
            continue_on_fail,
            connection,
            events,
            output,
        } => {
            cmd::run::run_cmd(&items, selection, continue_on_fail, connection, events, output)
                .await
        }
        Command::Plan {
            items,
            selection,
            account_id,
            credentials,
            output,
        } => {
            cmd::plan::plan_cmd(
                &items,
                selection,
                account_id.as_deref(),
                credentials.as_deref(),
                output,
            )
            .await
        }
        Command::Routes { surface, output } => cmd::routes::routes_cmd(surface, output),
        Command::Fields {
            surface,
            resource,
            operation,
            output,
        } => cmd::fields::fields_cmd(surface, &resource, &operation, output),
        Command::Check { output } => cmd::check::check_cmd(output),
    }
}
