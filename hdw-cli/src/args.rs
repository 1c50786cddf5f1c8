use std::path::PathBuf;

use clap::Args;
use hdw_core::Surface;

use crate::output::OutputFormat;

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SurfaceArg {
    Query,
    Management,
}

impl From<SurfaceArg> for Surface {
    fn from(s: SurfaceArg) -> Self {
        match s {
            SurfaceArg::Query => Surface::Query,
            SurfaceArg::Management => Surface::Management,
        }
    }
}

/// Which API surface to use, plus defaults applied to every item.
#[derive(Debug, Args, Clone)]
pub struct SelectionArgs {
    #[arg(long, value_enum, default_value_t = SurfaceArg::Query)]
    pub surface: SurfaceArg,
    /// Resource for items that do not name one.
    #[arg(long)]
    pub resource: Option<String>,
    /// Operation for items that do not name one.
    #[arg(long)]
    pub operation: Option<String>,
    /// Parameter default for every item; item values win.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set_params: Vec<String>,
}

#[derive(Debug, Args, Clone)]
pub struct ConnectionArgs {
    /// API base url. Falls back to HDW_BASE_URL, then the public endpoint.
    #[arg(long)]
    pub base_url: Option<String>,
    /// JSON or YAML file with `apiKey` and `accountId`. Environment variables fill gaps.
    #[arg(long)]
    pub credentials: Option<PathBuf>,
    #[arg(long, default_value = hdw_exec::executor::DEFAULT_AUTH_HEADER)]
    pub auth_header: String,
    #[arg(long, default_value_t = hdw_exec::executor::DEFAULT_MAX_RESPONSE_BYTES)]
    pub max_response_bytes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EventsArg {
    None,
    Stdout,
    Log,
}
