use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, RestaurantId, UserId};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Customer lookup and cart clearing happen in the Order actor's `on_create`
/// hook; this side only submits and waits.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, order), fields(user_id = %order.user_id, cart_id = %order.cart_id))]
    pub async fn place_order(&self, order: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?order, "place_order called");
        info!("Sending place_order to actor");
        self.inner.create(order).await.map_err(Self::map_error)
    }

    /// Moves an order along the dashboard progression.
    #[instrument(skip(self))]
    pub async fn advance(&self, id: OrderId, next: OrderStatus) -> Result<OrderStatus, OrderError> {
        self.inner
            .perform_action(id, OrderAction::Advance(next))
            .await
            .map_err(Self::map_error)
    }

    pub async fn accept(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.advance(id, OrderStatus::Accepted).await
    }

    pub async fn reject(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.advance(id, OrderStatus::Rejected).await
    }

    pub async fn start_preparing(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.advance(id, OrderStatus::Preparing).await
    }

    pub async fn mark_ready(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.advance(id, OrderStatus::Ready).await
    }

    /// A customer's order history, oldest first.
    pub async fn orders_for_user(&self, user_id: UserId) -> Result<Vec<Order>, OrderError> {
        let orders = self.list().await?;
        Ok(orders.into_iter().filter(|o| o.user_id == user_id).collect())
    }

    /// A restaurant dashboard's queue, oldest first.
    pub async fn orders_for_restaurant(&self, restaurant_id: &RestaurantId) -> Result<Vec<Order>, OrderError> {
        let orders = self.list().await?;
        Ok(orders
            .into_iter()
            .filter(|o| o.restaurant_id() == restaurant_id)
            .collect())
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => other
                .into_entity_error::<OrderError>()
                .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string())),
        }
    }
}
