use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "clinic")]
#[command(about = "Clinic front-end core: session, access gates and directory search")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// API base URL (defaults to api.base_url from config)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
