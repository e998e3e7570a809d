//! Top-level view: a sign-in/register panel or the dashboard, depending on
//! whether the current identity resolves to a user.

use crate::{CliClientResult, DashboardView, ProfileBackend};

use dash_core::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthForm {
    #[default]
    SignIn,
    Register,
}

impl AuthForm {
    fn toggled(self) -> Self {
        match self {
            AuthForm::SignIn => AuthForm::Register,
            AuthForm::Register => AuthForm::SignIn,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellState {
    Loading,
    SignedOut(AuthForm),
    SignedIn(Box<User>),
}

#[derive(Debug)]
pub struct ShellView {
    state: ShellState,
    dashboard: DashboardView,
}

impl Default for ShellView {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellView {
    pub fn new() -> Self {
        Self {
            state: ShellState::Loading,
            dashboard: DashboardView::new(),
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn dashboard(&self) -> &DashboardView {
        &self.dashboard
    }

    /// Ask the backend who we are.
    ///
    /// Signing out keeps whichever auth form was already showing. Signing in
    /// also loads the dashboard's stats.
    pub async fn resolve(&mut self, backend: &dyn ProfileBackend) -> CliClientResult<()> {
        match backend.current_user().await? {
            None => {
                let form = match self.state {
                    ShellState::SignedOut(form) => form,
                    _ => AuthForm::SignIn,
                };
                self.state = ShellState::SignedOut(form);
            }
            Some(user) => {
                self.state = ShellState::SignedIn(Box::new(user));
                self.dashboard.refresh(backend).await?;
            }
        }
        Ok(())
    }

    /// Switch between sign-in and register; no-op unless signed out
    pub fn toggle_auth_form(&mut self) {
        if let ShellState::SignedOut(form) = self.state {
            self.state = ShellState::SignedOut(form.toggled());
        }
    }

    /// Name, then email, then "User". `None` unless signed in.
    pub fn greeting(&self) -> Option<&str> {
        match &self.state {
            ShellState::SignedIn(user) => Some(user.display_label()),
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        match &self.state {
            ShellState::Loading => "Loading...\n".to_string(),
            ShellState::SignedOut(AuthForm::SignIn) => concat!(
                "Secure Login System\n",
                "Sign in to access your dashboard\n",
                "\n",
                "  dash sign-in --token <jwt>\n",
                "\n",
                "Don't have an account? Create one here: dash dashboard --register\n",
            )
            .to_string(),
            ShellState::SignedOut(AuthForm::Register) => concat!(
                "Secure Login System\n",
                "Create your account\n",
                "\n",
                "  Register with your identity provider, then run:\n",
                "  dash sign-in --token <jwt>\n",
                "\n",
                "Already have an account? Sign in: dash dashboard\n",
            )
            .to_string(),
            ShellState::SignedIn(user) => {
                format!(
                    "Welcome Back!\nHello, {}\n\n{}",
                    user.display_label(),
                    self.dashboard.render()
                )
            }
        }
    }
}
