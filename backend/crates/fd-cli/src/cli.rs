use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "fd")]
#[command(about = "Food donation marketplace CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (auto-discovered from server.json, or specify manually)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// User ID sent as X-User-Id (required for posting, claiming and editing profiles)
    #[arg(long, global = true)]
    pub user_id: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
