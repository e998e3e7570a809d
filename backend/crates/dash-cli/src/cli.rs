use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "dash")]
#[command(about = "Profile dashboard CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL
    #[arg(long, global = true, default_value = "http://127.0.0.1:8000")]
    pub server: String,

    /// Bearer token (overrides the stored session)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// User ID sent as X-User-Id (development servers only)
    #[arg(long, global = true)]
    pub user_id: Option<String>,

    /// Session file (defaults to the OS config directory)
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
