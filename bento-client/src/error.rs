//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed at the transport level
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server replied with a non-2xx status
    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// Required configuration is absent at the point of use
    #[error("missing configuration: {0}")]
    Config(String),

    /// Response body did not match the expected shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Checkout requested with nothing in the cart
    #[error("cart is empty")]
    EmptyCart,

    /// Order assembly failed
    #[error("order error: {0}")]
    Order(#[from] bento_core::CartError),

    /// Payment backend rejected the intent request
    #[error("payment error: {0}")]
    Payment(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
