//! Operations on a cart session.
//!
//! Each [`CartAction`] maps onto one [`CartStore`] operation, and every action
//! answers with a [`CartSnapshot`] of the cart afterwards.

use crate::model::{Cart, CartStore, Money, Product, ProductId, Restaurant};

#[derive(Debug, Clone)]
pub enum CartAction {
    AddItem {
        product: Product,
        restaurant: Restaurant,
        quantity: u32,
    },
    RemoveItem(ProductId),
    /// Zero or a negative quantity removes the line.
    UpdateQuantity {
        product_id: ProductId,
        quantity: i64,
    },
    Clear,
    /// Clears the session only while it still holds exactly this cart.
    /// Fails with [`CartError::Changed`](super::CartError::Changed) otherwise.
    ClearOrdered(Cart),
    /// Read-only; returns the current state.
    Snapshot,
}

/// The cart and its totals as of one action.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    pub cart: Option<Cart>,
    pub item_count: u32,
    pub subtotal: Money,
    pub total: Money,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.cart.is_none()
    }
}

impl From<&CartStore> for CartSnapshot {
    fn from(store: &CartStore) -> Self {
        Self {
            cart: store.cart().cloned(),
            item_count: store.item_count(),
            subtotal: store.subtotal(),
            total: store.total(),
        }
    }
}
