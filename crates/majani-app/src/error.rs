// Rust guideline compliant 2026-10-12

//! Error handling for Majani application services.

use majani_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command and envelope responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested listing or user was not found.
    NotFound,
    /// The provided identifier matched multiple entities.
    AmbiguousId,
    /// The requested status transition is invalid.
    InvalidTransition,
    /// Input validation failed.
    ValidationError,
    /// The caller may not perform the action.
    NotAllowed,
    /// Credentials or one-time code were rejected.
    AuthFailed,
    /// Too many failed attempts for a live one-time code.
    RateLimited,
    /// A user with the same phone number already exists.
    Conflict,
    /// IO failure while reading or writing catalog data.
    IoError,
    /// The catalog has not been initialized.
    CatalogNotInitialized,
    /// The request included invalid inputs.
    InvalidInput,
    /// JSON serialization or parsing failed.
    JsonError,
    /// Configuration could not be loaded.
    ConfigError,
    /// A fallback for unexpected errors.
    Unknown,
}

impl ErrorCode {
    /// Maps a core library error to its stable code.
    #[must_use]
    pub fn for_core(error: &CoreError) -> Self {
        match error {
            CoreError::NotFound(_) => ErrorCode::NotFound,
            CoreError::AmbiguousId(_, _) => ErrorCode::AmbiguousId,
            CoreError::InvalidTransition(_) => ErrorCode::InvalidTransition,
            CoreError::InvalidListing(_) | CoreError::InvalidUser(_) | CoreError::InvalidId(_) => {
                ErrorCode::ValidationError
            }
            CoreError::Io(_) => ErrorCode::IoError,
            CoreError::Json(_) => ErrorCode::JsonError,
            CoreError::Config(_) => ErrorCode::ConfigError,
        }
    }
}

/// Structured details for core errors that carry extra context.
pub(crate) fn core_details(error: &CoreError) -> Option<serde_json::Value> {
    match error {
        CoreError::AmbiguousId(partial, matches) => Some(serde_json::json!({
            "partial": partial,
            "matches": matches,
        })),
        _ => None,
    }
}

/// Account and one-time code failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Phone number is not `09` followed by nine digits.
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    /// No user is registered with the phone number.
    #[error("No user registered with phone {0}")]
    UnknownPhone(String),

    /// A user with the phone number already exists.
    #[error("Phone {0} is already registered")]
    PhoneTaken(String),

    /// Password did not match.
    #[error("Wrong password")]
    WrongPassword,

    /// No one-time code was issued for the phone.
    #[error("No pending code for {0}")]
    NoPendingCode(String),

    /// The one-time code has expired.
    #[error("Code has expired")]
    CodeExpired,

    /// The one-time code did not match.
    #[error("Wrong code")]
    InvalidCode,

    /// Failed attempts reached the limit for the live code.
    #[error("Too many attempts, try again in {retry_after_secs} seconds")]
    TooManyAttempts {
        /// Seconds until the live code expires.
        retry_after_secs: i64,
    },

    /// A registration or profile field failed validation.
    #[error("{0}")]
    InvalidField(String),
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog directory is missing.
    #[error("Majani catalog not initialized at {path}. Run 'majani init' first.")]
    CatalogNotInitialized {
        /// Path where `.majani` was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The caller is not allowed to perform the action.
    #[error("Not allowed: {0}")]
    NotAllowed(String),

    /// Account or one-time code failure.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::CatalogNotInitialized { .. } => ErrorCode::CatalogNotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::NotAllowed(_) => ErrorCode::NotAllowed,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Auth(auth) => match auth {
                AuthError::InvalidPhone(_) | AuthError::InvalidField(_) => {
                    ErrorCode::ValidationError
                }
                AuthError::UnknownPhone(_) => ErrorCode::NotFound,
                AuthError::PhoneTaken(_) => ErrorCode::Conflict,
                AuthError::WrongPassword
                | AuthError::NoPendingCode(_)
                | AuthError::CodeExpired
                | AuthError::InvalidCode => ErrorCode::AuthFailed,
                AuthError::TooManyAttempts { .. } => ErrorCode::RateLimited,
            },
            AppError::Core(core) => ErrorCode::for_core(core),
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::CatalogNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Auth(AuthError::TooManyAttempts { retry_after_secs }) => {
                Some(serde_json::json!({
                    "retry_after_secs": retry_after_secs,
                }))
            }
            AppError::Core(core) => core_details(core),
            _ => None,
        }
    }
}
