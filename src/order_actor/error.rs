//! Error types for the order service.

use crate::model::payment::PaymentError;
use crate::model::{Money, OrderStatus};
use thiserror::Error;

/// Errors that can occur while placing or progressing an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The customer placing the order does not exist.
    #[error("Invalid user: {0}")]
    InvalidUser(String),

    /// Checkout was attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Minimum order of {minimum} not reached (subtotal {subtotal})")]
    BelowMinimumOrder { minimum: Money, subtotal: Money },

    /// Items were added or changed while the order was being placed. The
    /// order is dropped and the cart kept as edited.
    #[error("Cart changed during checkout: {0}")]
    CartChanged(String),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    /// The dashboard asked for a status that cannot follow the current one.
    #[error("Order cannot move from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
