//! Error types for the cart service.

use thiserror::Error;

/// Cart operations themselves never fail; only reaching the session can.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Cart session not found: {0}")]
    NotFound(String),

    /// The cart was edited after it was handed to checkout.
    #[error("Cart changed during checkout: {0}")]
    Changed(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
