use crate::UserId;

/// Result of resolving the caller of a request.
///
/// Passed explicitly into every service operation so that each one runs
/// against a known-or-absent principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Anonymous,
    Authenticated(UserId),
}

impl Identity {
    pub fn authenticated(id: impl Into<UserId>) -> Self {
        Self::Authenticated(id.into())
    }

    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(id) => Some(id),
        }
    }
}
