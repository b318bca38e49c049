// Application error type and result alias, built on thiserror.
use thiserror::Error;

pub mod response;

pub use response::ApiError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

impl AppError {
    /// Message shown to the caller; the variant prefix is left out.
    pub fn message(&self) -> String {
        match self {
            AppError::Authentication(msg)
            | AppError::NotFound(msg)
            | AppError::Forbidden(msg)
            | AppError::Validation(msg) => msg.clone(),
            AppError::Session(_) | AppError::PasswordHash(_) => "Server error".to_string(),
        }
    }
}

// Custom result type
pub type AppResult<T> = Result<T, AppError>;
