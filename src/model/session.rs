//! A browsing session's cart, as held by the cart service.

use super::cart::CartStore;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for cart sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub u64);

impl From<u64> for CartId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// One session's [`CartStore`].
///
/// # Actor Framework
/// Implements [`ActorEntity`](crate::framework::ActorEntity) in
/// [`crate::cart_actor::entity`]; cart operations arrive as
/// [`CartAction`](crate::cart_actor::CartAction)s.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSession {
    pub id: CartId,
    pub store: CartStore,
}

/// Payload for opening a cart session. Sessions start empty.
#[derive(Debug, Clone, Default)]
pub struct CartOpen;
