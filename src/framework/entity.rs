//! The contract a service resource implements to live inside a [`ResourceActor`].
//!
//! Every service in the app (users, cart sessions, orders) is a map of
//! resources owned by one actor. The associated types pin each request payload
//! to its resource, so a `CartAction` can never reach the order service.
//!
//! [`ResourceActor`]: crate::framework::ResourceActor

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A resource managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// # Hooks
/// `on_create` has an empty default body. `on_update` and `handle_action`
/// must be written by every resource, even if they only return `Ok`.
///
/// # Context
/// `Context` carries the handles of other services. It is handed to
/// [`ResourceActor::run`](crate::framework::ResourceActor::run), not to the
/// constructor, so two services can be built before either knows about the
/// other.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier allocated by the actor from a running counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u64>;

    /// Payload for creating a resource.
    type Create: Send + Sync + Debug;

    /// Payload for a plain field update.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g. adding a line item to a cart).
    type Action: Send + Sync + Debug;

    /// What an action answers with.
    type ActionResult: Send + Sync + Debug;

    /// Handles of the services this resource talks to. `()` when none.
    type Context: Send + Sync;

    /// One error enum per service.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the resource from its freshly allocated id. Synchronous
    /// validation belongs here; anything needing another service goes in
    /// [`on_create`](ActorEntity::on_create).
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Runs after construction and before the resource is stored. An error
    /// discards the resource.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
