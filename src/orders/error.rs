//! Order query error types
//!
//! Every failure maps onto one of three outcomes for the caller:
//! - `InvalidRequest` (400) - malformed or insufficient input
//! - `NotFound` (404) - valid request with an empty result
//! - `Internal` (500) - the dataset itself is inconsistent

use hyper::StatusCode;
use thiserror::Error;

/// Result type for order queries
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors returned by the filter and sort operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Malformed or insufficient request input
    #[error("{0}")]
    InvalidRequest(String),

    /// The request was valid but nothing matched
    #[error("{0}")]
    NotFound(String),

    /// Data-integrity problem found while processing
    #[error("{0}")]
    Internal(String),
}

impl QueryError {
    pub fn no_filters() -> Self {
        Self::InvalidRequest("At least one filter must be provided".to_string())
    }

    pub fn invalid_order_id() -> Self {
        Self::InvalidRequest("Invalid order ID format".to_string())
    }

    pub fn invalid_price() -> Self {
        Self::InvalidRequest("Invalid or missing price field in order data".to_string())
    }

    pub fn no_shipping_match() -> Self {
        Self::NotFound("No orders found matching the shipping address".to_string())
    }

    pub fn no_match() -> Self {
        Self::NotFound("No orders found matching the criteria".to_string())
    }

    pub fn sort_failed() -> Self {
        Self::Internal("Error sorting orders by timestamp".to_string())
    }

    /// HTTP status code for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Why an order's `created_at` could not be turned into a timestamp
#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("order {id}: missing created_at")]
    Missing { id: String },

    #[error("order {id}: created_at is not a string: {value}")]
    NotText { id: String, value: String },

    #[error("order {id}: invalid created_at '{value}': {source}")]
    Invalid {
        id: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Startup failure while loading the orders file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read orders file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse orders file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
