//! Typed error handling for the storefront
//!
//! Every failure a handler can produce is a [`StoreError`] variant with a
//! stable error code and an HTTP status mapping, so clients can branch on
//! the code instead of parsing messages.
//!
//! # Error Categories
//!
//! - [`ArgumentError`]: malformed filter bounds, unknown sort keys, bad form
//!   fields — rejected at the call boundary, never coerced
//! - [`AuthError`]: login/registration/role failures
//! - [`CartError`]: cart and checkout preconditions
//! - `NotFound`: a missing product, order, user, session, message, or review
//!
//! An empty catalog result is NOT an error; it is a valid outcome rendered
//! as an empty state by the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for the storefront
#[derive(Debug)]
pub enum StoreError {
    /// Invalid argument at a call boundary
    Argument(ArgumentError),

    /// Authentication and authorization failures
    Auth(AuthError),

    /// Cart and checkout precondition failures
    Cart(CartError),

    /// A named resource does not exist
    NotFound { resource: &'static str, id: String },

    /// Internal errors (poisoned lock, broken invariant); should not happen
    /// in normal operation
    Internal(String),
}

/// Errors for malformed inputs, rejected before any state is touched
#[derive(Debug, thiserror::Error)]
pub enum ArgumentError {
    #[error("unknown sort key: {0:?}")]
    UnknownSortKey(String),

    #[error("{field} must be non-negative (got {value})")]
    NegativeBound { field: &'static str, value: f64 },

    #[error("{field} must not exceed {max} (got {value})")]
    BoundTooLarge {
        field: &'static str,
        max: f64,
        value: f64,
    },

    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("an account with this email already exists")]
    EmailTaken,

    #[error("you must be logged in to do that")]
    NotLoggedIn,

    #[error("this action requires an admin account")]
    Forbidden,

    #[error("the SuperAdmin role cannot be changed")]
    SuperAdminLocked,
}

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("the cart is empty")]
    EmptyCart,

    #[error("product {product_id} is not in the cart")]
    NotInCart { product_id: u32 },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Argument(e) => write!(f, "{}", e),
            StoreError::Auth(e) => write!(f, "{}", e),
            StoreError::Cart(e) => write!(f, "{}", e),
            StoreError::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
            StoreError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Argument(e) => Some(e),
            StoreError::Auth(e) => Some(e),
            StoreError::Cart(e) => Some(e),
            _ => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl StoreError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            StoreError::Argument(_) => StatusCode::BAD_REQUEST,
            StoreError::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            StoreError::Auth(AuthError::NotLoggedIn) => StatusCode::UNAUTHORIZED,
            StoreError::Auth(AuthError::EmailTaken) => StatusCode::CONFLICT,
            StoreError::Auth(_) => StatusCode::FORBIDDEN,
            StoreError::Cart(_) => StatusCode::UNPROCESSABLE_ENTITY,
            StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
            StoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::Argument(ArgumentError::UnknownSortKey(_)) => "UNKNOWN_SORT_KEY",
            StoreError::Argument(_) => "INVALID_ARGUMENT",
            StoreError::Auth(AuthError::InvalidCredentials) => "INVALID_CREDENTIALS",
            StoreError::Auth(AuthError::EmailTaken) => "EMAIL_TAKEN",
            StoreError::Auth(AuthError::NotLoggedIn) => "NOT_LOGGED_IN",
            StoreError::Auth(AuthError::SuperAdminLocked) => "SUPER_ADMIN_LOCKED",
            StoreError::Auth(AuthError::Forbidden) => "FORBIDDEN",
            StoreError::Cart(CartError::EmptyCart) => "EMPTY_CART",
            StoreError::Cart(CartError::NotInCart { .. }) => "NOT_IN_CART",
            StoreError::NotFound { .. } => "NOT_FOUND",
            StoreError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            StoreError::NotFound { resource, id } => Some(serde_json::json!({
                "resource": resource,
                "id": id,
            })),
            StoreError::Argument(ArgumentError::NegativeBound { field, value }) => {
                Some(serde_json::json!({ "field": field, "value": value }))
            }
            _ => None,
        }
    }

    /// Shorthand for a missing-resource error
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        StoreError::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Map validator output onto the invalid-argument category
    pub fn from_validation(errors: validator::ValidationErrors) -> Self {
        StoreError::Argument(ArgumentError::Invalid {
            field: "body",
            reason: errors.to_string(),
        })
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

impl From<ArgumentError> for StoreError {
    fn from(e: ArgumentError) -> Self {
        StoreError::Argument(e)
    }
}

impl From<AuthError> for StoreError {
    fn from(e: AuthError) -> Self {
        StoreError::Auth(e)
    }
}

impl From<CartError> for StoreError {
    fn from(e: CartError) -> Self {
        StoreError::Cart(e)
    }
}

/// Convenience alias used throughout the crate
pub type StoreResult<T> = Result<T, StoreError>;
