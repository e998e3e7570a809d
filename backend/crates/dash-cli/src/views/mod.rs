pub(crate) mod backend;
pub(crate) mod dashboard;
pub(crate) mod notice;
pub(crate) mod shell;

pub use backend::ProfileBackend;
pub use dashboard::{DashboardView, EditMode};
pub use notice::Notice;
pub use shell::{AuthForm, ShellState, ShellView};
