//! dash - profile dashboard CLI
//!
//! # Examples
//!
//! ```bash
//! # Store a token issued by the identity provider
//! dash sign-in --token <jwt>
//!
//! # Show the dashboard
//! dash dashboard
//!
//! # Change the display name
//! dash edit-name "Alice"
//!
//! # Talk to a development server as a specific user
//! dash --user-id alice whoami --pretty
//! ```

use dash_cli::{Cli, run};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            if output.success {
                println!("{}", output.text.trim_end());
                ExitCode::SUCCESS
            } else {
                eprintln!("{}", output.text.trim_end());
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
