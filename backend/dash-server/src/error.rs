use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] dash_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] dash_db::DbError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] dash_auth::AuthError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
