//! Profile statistics panel with an inline name editor.

use crate::views::notice::{NAME_EMPTY, PROFILE_UPDATE_FAILED, PROFILE_UPDATED};
use crate::{CliClientResult, Notice, ProfileBackend};

use dash_core::UserStats;

use std::fmt::Write;

const NOT_PROVIDED: &str = "Not provided";
const NOT_SET: &str = "Not set";
const NAME_PLACEHOLDER: &str = "Enter your name";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing {
        draft: String,
    },
}

#[derive(Debug, Default)]
pub struct DashboardView {
    /// `None` until the first successful fetch, or when the caller has no record
    stats: Option<UserStats>,
    mode: EditMode,
    notice: Option<Notice>,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> Option<&UserStats> {
        self.stats.as_ref()
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.stats.is_none()
    }

    /// Re-fetch stats. On failure the previous stats are kept.
    pub async fn refresh(&mut self, backend: &dyn ProfileBackend) -> CliClientResult<()> {
        self.stats = backend.user_stats().await?;
        Ok(())
    }

    /// Open the editor with an empty draft
    pub fn begin_edit(&mut self) {
        self.mode = EditMode::Editing {
            draft: String::new(),
        };
    }

    /// Replace the draft; ignored unless editing
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let EditMode::Editing { draft } = &mut self.mode {
            *draft = text.into();
        }
    }

    /// Leave the editor, discarding the draft
    pub fn cancel(&mut self) {
        self.mode = EditMode::Viewing;
    }

    /// Save the trimmed draft.
    ///
    /// A blank draft never reaches the backend, and neither does any draft
    /// before stats have loaded. On success the editor closes and stats are
    /// re-fetched; on failure the editor stays open with the draft intact.
    pub async fn submit(&mut self, backend: &dyn ProfileBackend) {
        let EditMode::Editing { draft } = &self.mode else {
            return;
        };

        if self.stats.is_none() {
            self.notice = Some(Notice::Error(PROFILE_UPDATE_FAILED.to_string()));
            return;
        }

        let name = draft.trim().to_string();
        if name.is_empty() {
            self.notice = Some(Notice::Error(NAME_EMPTY.to_string()));
            return;
        }

        match backend.update_profile(&name).await {
            Ok(_) => {
                self.notice = Some(Notice::Success(PROFILE_UPDATED.to_string()));
                self.mode = EditMode::Viewing;
                // Stale stats are still worth showing if the re-fetch fails
                let _ = self.refresh(backend).await;
            }
            Err(_) => {
                self.notice = Some(Notice::Error(PROFILE_UPDATE_FAILED.to_string()));
            }
        }
    }

    pub fn render(&self) -> String {
        let Some(stats) = &self.stats else {
            let mut out = String::from("Loading profile...\n");
            if let Some(notice) = &self.notice {
                let _ = writeln!(out);
                let _ = writeln!(out, "{}", notice);
            }
            return out;
        };

        let email = non_empty(stats.email.as_deref()).unwrap_or(NOT_PROVIDED);
        let name = non_empty(stats.name.as_deref()).unwrap_or(NOT_SET);

        let mut out = String::new();
        let _ = writeln!(out, "Dashboard");
        let _ = writeln!(out, "  Email:        {}", email);
        let _ = writeln!(out, "  Name:         {}", name);
        let _ = writeln!(
            out,
            "  Member Since: {}",
            stats.join_date.format("%Y-%m-%d")
        );
        let _ = writeln!(
            out,
            "  Last Login:   {}",
            stats.last_login.format("%Y-%m-%d %H:%M:%S UTC")
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "Update Profile");

        match &self.mode {
            EditMode::Viewing => {
                let _ = writeln!(out, "  [Edit Profile]");
            }
            EditMode::Editing { draft } => {
                let shown = if draft.is_empty() {
                    format!(
                        "({})",
                        non_empty(stats.name.as_deref()).unwrap_or(NAME_PLACEHOLDER)
                    )
                } else {
                    draft.clone()
                };
                let _ = writeln!(out, "  Name: {}", shown);
                let _ = writeln!(out, "  [Save Changes] [Cancel]");
            }
        }

        if let Some(notice) = &self.notice {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", notice);
        }

        out
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
