//! # Cart service
//!
//! One [`CartSession`] per browsing session, each holding a
//! [`CartStore`](crate::model::CartStore). The store's rules apply unchanged;
//! the service only gives the presentation layer a shared handle to it.
//!
//! - [`actions`] - [`CartAction`] and the [`CartSnapshot`] every action returns
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation
//! - [`error`] - [`CartError`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::CartSession;

/// Creates a new cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<CartSession>, ResourceClient<CartSession>) {
    ResourceActor::new(buffer_size)
}
