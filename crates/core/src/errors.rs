//! Core error types for the tokengallery client.
//!
//! This module defines transport-agnostic error types. HTTP-specific failures
//! are converted into [`ApiError`] by the client crate.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the marketplace client.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Marketplace API operation failed: {0}")]
    Api(#[from] ApiError),
}

/// Errors raised locally by the validation gates, strictly before any
/// request is dispatched. These never reach the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required input field was left empty.
    #[error("Field '{0}' is required")]
    EmptyField(&'static str),

    /// The field must be a whole-number percentage.
    #[error("Field '{0}' must be a whole number")]
    NotInteger(&'static str),

    /// The field falls outside its permitted bounds.
    #[error("Field '{field}' must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
    },

    /// The unit price must be a number greater than zero.
    #[error("Unit price must be greater than zero")]
    NonPositivePrice,

    /// A listing without a resolvable seller address cannot be bid on.
    #[error("Listing has no seller address")]
    MissingAddress,

    /// A monetary amount failed to parse or was not positive.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// Failures surfaced by the external marketplace API.
///
/// The two variants are deliberately distinct: an [`ApiError::Application`]
/// carries the server's own message verbatim (some error codes are
/// domain-specific and only the server knows their meaning), while an
/// [`ApiError::Transport`] is a connectivity-class failure with no
/// server-supplied semantics attached.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server returned a well-formed envelope with a non-zero errno.
    #[error("server rejected the request (errno {errno}): {message}")]
    Application { errno: String, message: String },

    /// Network failure or non-success HTTP status.
    #[error("request failed, check your connection: {0}")]
    Transport(String),
}

impl ApiError {
    /// Whether this failure came from the application envelope rather than
    /// the transport.
    pub fn is_application(&self) -> bool {
        matches!(self, ApiError::Application { .. })
    }
}
