pub mod error;
pub mod models;
pub mod profile_service;
pub mod user_store;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::identity::Identity;
pub use models::update_ack::UpdateAck;
pub use models::user::User;
pub use models::user_id::UserId;
pub use models::user_stats::UserStats;
pub use profile_service::ProfileService;
pub use user_store::UserStore;
