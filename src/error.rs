//! Error types for the lending core

use serde::Serialize;
use thiserror::Error;

use crate::models::book::BookId;

/// Discrete outcome codes handed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    CapacityExceeded = 1,
    InvalidUsername = 2,
    DuplicateUsername = 3,
    NotAuthenticated = 4,
    BorrowLimitExceeded = 5,
    BookUnavailable = 6,
    NotFound = 7,
    NotBorrowedByUser = 8,
    InvalidCredentials = 9,
    NotAuthorized = 10,
    BadValue = 11,
    NoContent = 12,
    Failure = 13,
}

impl ErrorCode {
    /// Outcome code of a whole operation result
    pub fn of<T>(result: &AppResult<T>) -> Self {
        match result {
            Ok(_) => ErrorCode::Success,
            Err(e) => e.code(),
        }
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Capacity exceeded: {registry} is full ({capacity} entries)")]
    CapacityExceeded {
        registry: &'static str,
        capacity: usize,
    },

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Authorization failed: {0}")]
    NotAuthorized(String),

    #[error("Borrow limit reached: at most {0} books may be held at once")]
    BorrowLimitExceeded(usize),

    #[error("Book {0} is not available")]
    BookUnavailable(BookId),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Book {0} is not borrowed by the current user")]
    NotBorrowedByUser(BookId),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Book {0} has no stored content")]
    NoContent(BookId),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Outcome code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::CapacityExceeded { .. } => ErrorCode::CapacityExceeded,
            AppError::InvalidUsername(_) => ErrorCode::InvalidUsername,
            AppError::DuplicateUsername(_) => ErrorCode::DuplicateUsername,
            AppError::Authentication(_) => ErrorCode::InvalidCredentials,
            AppError::NotAuthenticated => ErrorCode::NotAuthenticated,
            AppError::NotAuthorized(_) => ErrorCode::NotAuthorized,
            AppError::BorrowLimitExceeded(_) => ErrorCode::BorrowLimitExceeded,
            AppError::BookUnavailable(_) => ErrorCode::BookUnavailable,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::NotBorrowedByUser(_) => ErrorCode::NotBorrowedByUser,
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::NoContent(_) => ErrorCode::NoContent,
            AppError::Config(_) | AppError::Internal(_) => ErrorCode::Failure,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
