//! Handle to the cart service, one method per [`CartAction`].

use crate::cart_actor::{CartAction, CartError, CartSnapshot};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Cart, CartId, CartOpen, CartSession, Product, ProductId, Restaurant};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartSession>,
}

#[async_trait]
impl ActorClient<CartSession> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<CartSession> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CartError::NotFound(id),
            other => other
                .into_entity_error::<CartError>()
                .unwrap_or_else(|e| CartError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl CartClient {
    pub fn new(inner: ResourceClient<CartSession>) -> Self {
        Self { inner }
    }

    /// Starts an empty session.
    #[instrument(skip(self))]
    pub async fn open(&self) -> Result<CartId, CartError> {
        debug!("Sending request");
        self.inner.create(CartOpen).await.map_err(Self::map_error)
    }

    async fn act(&self, id: CartId, action: CartAction) -> Result<CartSnapshot, CartError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }

    /// Adds `quantity` units. A product from another restaurant replaces the
    /// whole cart.
    #[instrument(skip(self, product, restaurant), fields(product_id = %product.id))]
    pub async fn add_item(
        &self,
        id: CartId,
        product: Product,
        restaurant: Restaurant,
        quantity: u32,
    ) -> Result<CartSnapshot, CartError> {
        self.act(
            id,
            CartAction::AddItem {
                product,
                restaurant,
                quantity,
            },
        )
        .await
    }

    pub async fn add_one(
        &self,
        id: CartId,
        product: Product,
        restaurant: Restaurant,
    ) -> Result<CartSnapshot, CartError> {
        self.add_item(id, product, restaurant, 1).await
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: CartId, product_id: ProductId) -> Result<CartSnapshot, CartError> {
        self.act(id, CartAction::RemoveItem(product_id)).await
    }

    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        id: CartId,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<CartSnapshot, CartError> {
        self.act(
            id,
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn clear(&self, id: CartId) -> Result<CartSnapshot, CartError> {
        self.act(id, CartAction::Clear).await
    }

    /// Empties the session after checkout, provided nobody edited it since
    /// `ordered` was taken from it.
    #[instrument(skip(self, ordered))]
    pub async fn clear_ordered(&self, id: CartId, ordered: Cart) -> Result<CartSnapshot, CartError> {
        self.act(id, CartAction::ClearOrdered(ordered)).await
    }

    pub async fn snapshot(&self, id: CartId) -> Result<CartSnapshot, CartError> {
        self.act(id, CartAction::Snapshot).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, MockClient};
    use crate::model::CartStore;

    #[tokio::test]
    async fn test_clear_sends_clear_action() {
        let (inner, mut receiver) = create_mock_client::<CartSession>(4);
        let client = CartClient::new(inner);

        let task = tokio::spawn(async move { client.clear(CartId(3)).await });
        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, CartId(3));
        assert!(matches!(action, CartAction::Clear));
        responder
            .send(Ok(CartSnapshot::from(&CartStore::new())))
            .unwrap();

        let snapshot = task.await.unwrap().unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.item_count, 0);
    }

    #[tokio::test]
    async fn test_missing_session_maps_to_not_found() {
        let mut mock = MockClient::<CartSession>::new();
        mock.expect_action(CartId(9))
            .return_err(FrameworkError::NotFound("cart_9".into()));
        let client = CartClient::new(mock.client());

        let result = client.snapshot(CartId(9)).await;
        assert_eq!(result, Err(CartError::NotFound("cart_9".into())));
        mock.verify();
    }
}
