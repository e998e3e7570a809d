//! dash-cli library
//!
//! HTTP client for the profile API, the terminal views built on it, and the
//! `dash` command runner.

pub mod cli;
pub(crate) mod client;
pub mod commands;
pub(crate) mod session;
pub(crate) mod views;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError};
pub use commands::{CommandOutput, Commands, run};
pub use session::Session;
pub use views::{
    AuthForm, DashboardView, EditMode, Notice, ProfileBackend, ShellState, ShellView,
};
