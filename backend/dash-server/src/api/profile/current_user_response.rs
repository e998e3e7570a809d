use crate::UserDto;

use serde::Serialize;

/// `user` is `null` for anonymous callers and unknown ids
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub user: Option<UserDto>,
}
