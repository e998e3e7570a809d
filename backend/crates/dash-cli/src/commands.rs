use crate::{CliClientResult, Client, DashboardView, Session, ShellView, cli::Cli};

use dash_core::{User, UserStats};

use std::path::Path;

use clap::Subcommand;
use serde::Serialize;

const NOT_SIGNED_IN_HINT: &str = "Not signed in. Run `dash sign-in --token <jwt>` first.";

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current user record (null when signed out)
    Whoami,

    /// Show profile statistics (null when signed out)
    Stats,

    /// Set the display name exactly as given
    UpdateProfile { name: String },

    /// Set the display name through the dashboard editor (trimmed, non-blank)
    EditName { name: String },

    /// Render the dashboard, or the sign-in panel when signed out
    Dashboard {
        /// Show the registration panel instead of sign-in when signed out
        #[arg(long)]
        register: bool,
    },

    /// Store a bearer token for later commands
    SignIn {
        #[arg(long)]
        token: String,
    },

    /// Forget the stored bearer token
    SignOut,
}

/// What a command printed and whether it counts as success
#[derive(Debug)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    fn ok(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }
}

#[derive(Serialize)]
struct WhoamiOutput {
    user: Option<User>,
}

#[derive(Serialize)]
struct StatsOutput {
    stats: Option<UserStats>,
}

pub async fn run(cli: Cli) -> CliClientResult<CommandOutput> {
    let session_path = match cli.session_file {
        Some(ref path) => path.clone(),
        None => Session::default_path()?,
    };

    match &cli.command {
        Commands::SignIn { token } => sign_in(&cli, &session_path, token).await,
        Commands::SignOut => {
            let removed = Session::clear(&session_path)?;
            Ok(CommandOutput::ok(if removed {
                "Signed out".to_string()
            } else {
                "Not signed in".to_string()
            }))
        }
        Commands::Whoami => {
            let client = session_client(&cli, &session_path)?;
            let user = client.get_current_user().await?;
            render_json(&WhoamiOutput { user }, cli.pretty)
        }
        Commands::Stats => {
            let client = session_client(&cli, &session_path)?;
            let stats = client.get_user_stats().await?;
            render_json(&StatsOutput { stats }, cli.pretty)
        }
        Commands::UpdateProfile { name } => {
            let client = session_client(&cli, &session_path)?;
            let ack = client.update_profile(name).await?;
            render_json(&ack, cli.pretty)
        }
        Commands::EditName { name } => {
            let client = session_client(&cli, &session_path)?;
            let mut view = DashboardView::new();
            view.refresh(&client).await?;
            if view.is_loading() {
                return Ok(CommandOutput {
                    text: NOT_SIGNED_IN_HINT.to_string(),
                    success: false,
                });
            }
            view.begin_edit();
            view.set_draft(name.as_str());
            view.submit(&client).await;

            let success = !view.notice().is_some_and(|n| n.is_error());
            Ok(CommandOutput {
                text: view.render(),
                success,
            })
        }
        Commands::Dashboard { register } => {
            let client = session_client(&cli, &session_path)?;
            let mut shell = ShellView::new();
            shell.resolve(&client).await?;
            if *register {
                shell.toggle_auth_form();
            }
            Ok(CommandOutput::ok(shell.render()))
        }
    }
}

async fn sign_in(cli: &Cli, session_path: &Path, token: &str) -> CliClientResult<CommandOutput> {
    let session = Session {
        token: Some(token.to_string()),
    };
    session.save(session_path)?;

    let client = build_client(cli, Some(token));
    let mut shell = ShellView::new();
    shell.resolve(&client).await?;

    Ok(match shell.greeting() {
        Some(greeting) => CommandOutput::ok(format!("Signed in. Hello, {}", greeting)),
        None => CommandOutput {
            text: format!(
                "Token saved to {}, but the server did not accept it",
                session_path.display()
            ),
            success: false,
        },
    })
}

/// Client authenticated by `--token`, else by the stored session
fn session_client(cli: &Cli, session_path: &Path) -> CliClientResult<Client> {
    let token = match cli.token {
        Some(ref token) => Some(token.clone()),
        None => Session::load(session_path)?.token,
    };
    Ok(build_client(cli, token.as_deref()))
}

fn build_client(cli: &Cli, token: Option<&str>) -> Client {
    Client::new(&cli.server, cli.user_id.as_deref()).with_token(token)
}

fn render_json<T: Serialize>(value: &T, pretty: bool) -> CliClientResult<CommandOutput> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(CommandOutput::ok(text))
}
