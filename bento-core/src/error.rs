//! Core error types

use thiserror::Error;

/// Errors raised by the menu normalization pipeline.
///
/// These are boundary errors: a payload that is not one of the recognized
/// envelope shapes fails the whole normalization call. Callers that must
/// never surface a broken menu to the UI use
/// [`normalize_or_empty`](crate::normalize::normalize_or_empty) instead.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Payload is not an array and not a recognized envelope
    #[error("unrecognized menu payload shape: {0}")]
    UnrecognizedShape(String),

    /// The `body` field held a string that is not valid JSON
    #[error("malformed body JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// The unwrapped `body` value is not an array
    #[error("body did not unwrap to an item array")]
    BodyNotArray,
}

/// Errors raised while assembling an order from the cart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// A zero-item order is never submitted
    #[error("order must contain at least one cart line")]
    EmptyOrder,

    /// Dine-in orders are routed to a table
    #[error("dine-in order requires a table identifier")]
    MissingTable,
}
