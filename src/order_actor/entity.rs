//! [`ActorEntity`] implementation for [`Order`].
//!
//! Placing an order runs in two steps:
//!
//! 1. `from_create_params` checks what the cart snapshot alone can tell:
//!    payment method, cash change, restaurant minimum.
//! 2. `on_create` resolves the customer through the identity service, copies
//!    their default address, then clears the cart session the order came
//!    from. The session must still hold exactly the ordered cart; if it was
//!    edited meanwhile the order is dropped with
//!    [`OrderError::CartChanged`].
//!
//! New orders start `Pending`. After that only [`OrderAction::Advance`]
//! changes the status.

use super::{OrderAction, OrderError};
use crate::cart_actor::CartError;
use crate::clients::{ActorClient, CartClient, UserClient};
use crate::framework::ActorEntity;
use crate::model::{payment, Order, OrderCreate, OrderId, OrderStatus};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = OrderStatus;
    type Context = (UserClient, CartClient);
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        let cart = params.cart;
        if let Some(missing) = cart.missing_for_minimum() {
            debug!(%id, %missing, "Below minimum order");
            return Err(OrderError::BelowMinimumOrder {
                minimum: cart.subtotal() + missing,
                subtotal: cart.subtotal(),
            });
        }
        payment::validate(params.payment, params.change_for, cart.total())?;

        Ok(Self {
            id,
            user_id: params.user_id,
            cart_id: params.cart_id,
            cart,
            payment: params.payment,
            change_for: params.change_for,
            notes: params.notes.filter(|notes| !notes.trim().is_empty()),
            delivery_address: None,
            status: OrderStatus::Pending,
        })
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), OrderError> {
        let (user_client, cart_client) = ctx;

        let user = user_client
            .get(self.user_id)
            .await
            .map_err(|e| OrderError::InvalidUser(e.to_string()))?
            .ok_or_else(|| OrderError::InvalidUser(self.user_id.to_string()))?;
        self.delivery_address = user.default_address;

        cart_client
            .clear_ordered(self.cart_id, self.cart.clone())
            .await
            .map_err(|e| match e {
                CartError::Changed(cart_id) => OrderError::CartChanged(cart_id),
                other => OrderError::ActorCommunicationError(other.to_string()),
            })?;
        info!(order_id = %self.id, cart_id = %self.cart_id, "Cart cleared after checkout");
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), OrderError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &Self::Context,
    ) -> Result<OrderStatus, OrderError> {
        match action {
            OrderAction::Advance(next) => {
                if !self.status.can_advance_to(next) {
                    return Err(OrderError::InvalidTransition {
                        from: self.status,
                        to: next,
                    });
                }
                self.status = next;
                Ok(next)
            }
        }
    }
}
