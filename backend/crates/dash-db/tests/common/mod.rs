#![allow(dead_code)]

mod fixtures;
mod test_db;

pub use fixtures::{create_test_user, user_with_name};
pub use test_db::{create_test_pool, insert_raw_user};
