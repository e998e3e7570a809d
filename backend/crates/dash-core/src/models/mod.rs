pub mod identity;
pub mod update_ack;
pub mod user;
pub mod user_id;
pub mod user_stats;
