mod identity;
mod user;
