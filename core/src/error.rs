//! Unified error types for the TerraWatch social core
//!
//! This module defines error types for each layer:
//! - `ApiError`: backend REST client errors
//! - `AppError`: application layer errors (services, validation)

use thiserror::Error;

/// Backend REST API client errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized - invalid or expired token")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Application layer errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Backend error: {0}")]
    Api(#[from] ApiError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("A like request for {0} is already in flight")]
    LikeInFlight(String),

    #[error("Operation not found: {0}")]
    OperationNotFound(String),

    #[error("Operation {0} is already complete")]
    OperationComplete(String),
}