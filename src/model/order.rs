//! A placed order and its lifecycle status.
//!
//! # Actor Framework
//! [`Order`] implements [`ActorEntity`](crate::framework::ActorEntity) in
//! [`crate::order_actor::entity`]; see there for creation rules and the
//! status transitions the dashboard may request.

use super::cart::Cart;
use super::catalog::RestaurantId;
use super::money::Money;
use super::payment::PaymentMethod;
use super::session::CartId;
use super::user::{Address, UserId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Where an order stands.
///
/// `Pending → Accepted → Preparing → Ready` is the only forward path.
/// `Rejected` can only follow `Pending` and nothing follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Preparing,
    Ready,
    Rejected,
}

/// Errors of the status model.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StatusError {
    /// The value is not one of the five known statuses.
    #[error("Invalid order status: {0:?}")]
    InvalidStatus(String),
}

impl OrderStatus {
    /// The progression shown by the tracker, in order.
    pub const STEPS: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Accepted,
        OrderStatus::Preparing,
        OrderStatus::Ready,
    ];

    /// Position along [`STEPS`](Self::STEPS); `-1` for `Rejected`.
    pub fn rank(self) -> i8 {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Accepted => 1,
            OrderStatus::Preparing => 2,
            OrderStatus::Ready => 3,
            OrderStatus::Rejected => -1,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Ready | OrderStatus::Rejected)
    }

    /// Whether `next` may directly follow `self`.
    pub fn can_advance_to(self, next: OrderStatus) -> bool {
        match (self, next) {
            (OrderStatus::Pending, OrderStatus::Rejected) => true,
            (_, OrderStatus::Rejected) | (OrderStatus::Rejected, _) => false,
            (current, next) => next.rank() == current.rank() + 1,
        }
    }

    /// Wire name, as used in serialized orders.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Accepted => "accepted",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Rejected => "rejected",
        }
    }

    /// Headline shown for the status.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Aguardando confirmação",
            OrderStatus::Accepted => "Pedido aceito",
            OrderStatus::Preparing => "Em preparo",
            OrderStatus::Ready => "Pronto para entrega",
            OrderStatus::Rejected => "Pedido recusado",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = StatusError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "pending" => Ok(OrderStatus::Pending),
            "accepted" => Ok(OrderStatus::Accepted),
            "preparing" => Ok(OrderStatus::Preparing),
            "ready" => Ok(OrderStatus::Ready),
            "rejected" => Ok(OrderStatus::Rejected),
            other => Err(StatusError::InvalidStatus(other.to_string())),
        }
    }
}

impl TryFrom<&str> for OrderStatus {
    type Error = StatusError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    /// Session the cart came from; cleared once the order is stored.
    pub cart_id: CartId,
    pub cart: Cart,
    pub payment: PaymentMethod,
    /// Cash note the customer will pay with, when they need change.
    pub change_for: Option<Money>,
    pub notes: Option<String>,
    /// Copied from the customer's default address when the order is placed.
    pub delivery_address: Option<Address>,
    pub status: OrderStatus,
}

impl Order {
    pub fn restaurant_id(&self) -> &RestaurantId {
        &self.cart.restaurant().id
    }

    pub fn subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Change the courier must bring, if the customer asked for it.
    pub fn change_due(&self) -> Option<Money> {
        self.change_for.map(|note| note - self.total())
    }
}

/// Payload for placing an order from a cart snapshot.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: UserId,
    pub cart_id: CartId,
    pub cart: Cart,
    pub payment: PaymentMethod,
    pub change_for: Option<Money>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_mapping() {
        assert_eq!(OrderStatus::Pending.rank(), 0);
        assert_eq!(OrderStatus::Accepted.rank(), 1);
        assert_eq!(OrderStatus::Preparing.rank(), 2);
        assert_eq!(OrderStatus::Ready.rank(), 3);
        assert_eq!(OrderStatus::Rejected.rank(), -1);
    }

    #[test]
    fn test_parse_known_and_unknown_values() {
        for status in OrderStatus::STEPS.into_iter().chain([OrderStatus::Rejected]) {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
        assert_eq!(
            "cancelled".parse::<OrderStatus>(),
            Err(StatusError::InvalidStatus("cancelled".into()))
        );
        assert!(OrderStatus::try_from("Pending").is_err());
    }

    #[test]
    fn test_forward_transitions_only_to_successor() {
        use OrderStatus::*;
        assert!(Pending.can_advance_to(Accepted));
        assert!(Accepted.can_advance_to(Preparing));
        assert!(Preparing.can_advance_to(Ready));

        assert!(!Pending.can_advance_to(Preparing));
        assert!(!Accepted.can_advance_to(Pending));
        assert!(!Ready.can_advance_to(Ready));
        assert!(!Ready.can_advance_to(Accepted));
    }

    #[test]
    fn test_rejection_only_from_pending_and_final() {
        use OrderStatus::*;
        assert!(Pending.can_advance_to(Rejected));
        assert!(!Accepted.can_advance_to(Rejected));
        assert!(!Preparing.can_advance_to(Rejected));
        for next in [Pending, Accepted, Preparing, Ready, Rejected] {
            assert!(!Rejected.can_advance_to(next));
        }
        assert!(Rejected.is_terminal());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&OrderStatus::Preparing).unwrap();
        assert_eq!(json, "\"preparing\"");
        let status: OrderStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(status, OrderStatus::Rejected);
        assert!(serde_json::from_str::<OrderStatus>("\"shipped\"").is_err());
    }
}
