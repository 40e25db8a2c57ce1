//! # Order service
//!
//! Checkout turns a cart snapshot into an [`Order`]; the restaurant dashboard
//! then walks it along the status progression.
//!
//! The order actor depends on the identity and cart services, injected as
//! its context when the actor is started:
//!
//! ```rust,ignore
//! let (order_actor, order_client) = order_actor::new(32);
//! tokio::spawn(order_actor.run((user_client.clone(), cart_client.clone())));
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Order;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
