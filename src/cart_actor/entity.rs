//! [`ActorEntity`] implementation for [`CartSession`].

use super::{CartAction, CartError, CartSnapshot};
use crate::framework::ActorEntity;
use crate::model::{CartId, CartOpen, CartSession, CartStore};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for CartSession {
    type Id = CartId;
    type Create = CartOpen;
    type Update = ();
    type Action = CartAction;
    type ActionResult = CartSnapshot;
    type Context = ();
    type Error = CartError;

    fn from_create_params(id: CartId, _params: CartOpen) -> Result<Self, CartError> {
        Ok(Self {
            id,
            store: CartStore::new(),
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), CartError> {
        Ok(())
    }

    async fn handle_action(&mut self, action: CartAction, _ctx: &()) -> Result<CartSnapshot, CartError> {
        match action {
            CartAction::AddItem {
                product,
                restaurant,
                quantity,
            } => {
                let replaced = self
                    .store
                    .cart()
                    .is_some_and(|cart| cart.restaurant().id != restaurant.id);
                if replaced {
                    debug!(cart_id = %self.id, restaurant_id = %restaurant.id, "Replacing cart from another restaurant");
                }
                self.store.add_item(product, restaurant, quantity);
            }
            CartAction::RemoveItem(product_id) => self.store.remove_item(&product_id),
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => self.store.update_quantity(&product_id, quantity),
            CartAction::Clear => self.store.clear_cart(),
            CartAction::ClearOrdered(ordered) => {
                if self.store.cart() != Some(&ordered) {
                    debug!(cart_id = %self.id, "Cart edited since checkout began");
                    return Err(CartError::Changed(self.id.to_string()));
                }
                self.store.clear_cart();
            }
            CartAction::Snapshot => {}
        }
        Ok(CartSnapshot::from(&self.store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductId, Restaurant};
    use rust_decimal::Decimal;

    fn session_with(items: &[(&str, u32)]) -> CartSession {
        let restaurant = Restaurant::new("r1", "Burger House", "Lanches", Decimal::from(5));
        let mut store = CartStore::new();
        for (id, quantity) in items {
            store.add_item(Product::new(*id, *id, Decimal::from(10), "r1"), restaurant.clone(), *quantity);
        }
        CartSession { id: CartId(1), store }
    }

    #[tokio::test]
    async fn test_clear_ordered_empties_unchanged_cart() {
        let mut session = session_with(&[("p1", 2)]);
        let ordered = session.store.cart().cloned().unwrap();

        let snapshot = session
            .handle_action(CartAction::ClearOrdered(ordered), &())
            .await
            .unwrap();
        assert!(snapshot.is_empty());
        assert!(session.store.is_empty());
    }

    #[tokio::test]
    async fn test_clear_ordered_keeps_edited_cart() {
        let mut session = session_with(&[("p1", 2)]);
        let ordered = session.store.cart().cloned().unwrap();
        session
            .handle_action(CartAction::UpdateQuantity { product_id: ProductId::from("p1"), quantity: 3 }, &())
            .await
            .unwrap();

        let result = session.handle_action(CartAction::ClearOrdered(ordered), &()).await;
        assert_eq!(result, Err(CartError::Changed("cart_1".into())));
        assert_eq!(session.store.quantity_of(&ProductId::from("p1")), 3);
    }
}
