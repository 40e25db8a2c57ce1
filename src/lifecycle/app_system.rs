use crate::clients::{CartClient, OrderClient, UserClient};
use crate::config::AppConfig;
use crate::model::{CartId, Money, OrderCreate, OrderId, PaymentMethod, UserId};
use crate::order_actor::OrderError;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Starts the identity, cart and order services and hands out their clients.
///
/// This replaces the app-wide providers of a UI: screens hold clones of these
/// handles instead of reading shared context.
///
/// # Example
///
/// ```ignore
/// let system = AppSystem::new(AppConfig::from_env());
///
/// let user = system.user_client.register("Ana", "75999999999", "123456").await?;
/// let cart = system.cart_client.open().await?;
/// system.cart_client.add_item(cart, product, restaurant, 2).await?;
/// let order = system.checkout(user.id, cart, PaymentMethod::Pix, None, None).await?;
///
/// system.shutdown().await?;
/// ```
pub struct AppSystem {
    pub user_client: UserClient,
    pub cart_client: CartClient,
    pub order_client: OrderClient,

    checkout_latency: Duration,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl AppSystem {
    /// Must be called inside a Tokio runtime.
    pub fn new(config: AppConfig) -> Self {
        let (user_actor, user_inner) = crate::user_actor::new(config.channel_buffer);
        let (cart_actor, cart_inner) = crate::cart_actor::new(config.channel_buffer);
        let (order_actor, order_inner) = crate::order_actor::new(config.channel_buffer);

        let user_client = UserClient::new(user_inner, config.auth_latency);
        let cart_client = CartClient::new(cart_inner);
        let order_client = OrderClient::new(order_inner);

        let user_handle = tokio::spawn(user_actor.run(()));
        let cart_handle = tokio::spawn(cart_actor.run(()));
        // Orders look up customers and clear carts.
        let order_handle = tokio::spawn(order_actor.run((user_client.clone(), cart_client.clone())));

        info!(?config, "System started");
        Self {
            user_client,
            cart_client,
            order_client,
            checkout_latency: config.checkout_latency,
            handles: vec![user_handle, cart_handle, order_handle],
        }
    }

    /// Places an order for whatever is in the session's cart once the
    /// simulated submission delay has passed.
    ///
    /// Edits that land between the snapshot and the order being stored make
    /// the order fail with [`OrderError::CartChanged`]; the cart keeps them.
    #[instrument(skip(self, notes))]
    pub async fn checkout(
        &self,
        user_id: UserId,
        cart_id: CartId,
        payment: PaymentMethod,
        change_for: Option<Money>,
        notes: Option<String>,
    ) -> Result<OrderId, OrderError> {
        tokio::time::sleep(self.checkout_latency).await;
        let snapshot = self
            .cart_client
            .snapshot(cart_id)
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
        let cart = snapshot.cart.ok_or(OrderError::EmptyCart)?;

        self.order_client
            .place_order(OrderCreate {
                user_id,
                cart_id,
                cart,
                payment,
                change_for,
                notes,
            })
            .await
    }

    /// Drops every client, then waits for the actors to drain and stop.
    ///
    /// The order actor holds its own user and cart clients, so those two
    /// services stop only after it has.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.cart_client);
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
