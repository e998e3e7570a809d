use dash_core::UpdateAck;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UpdateProfileResponse {
    pub success: bool,
}

impl From<UpdateAck> for UpdateProfileResponse {
    fn from(ack: UpdateAck) -> Self {
        Self {
            success: ack.success,
        }
    }
}
