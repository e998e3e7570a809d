use serde::{Deserialize, Serialize};

/// Acknowledgment returned by a successful profile update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAck {
    pub success: bool,
}

impl UpdateAck {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
