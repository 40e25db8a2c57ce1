//! # Identity service
//!
//! Registered users and the mocked phone + OTP sign-in.
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`]
//! - [`new()`] - creates the actor and its raw client
//!
//! Verification codes are never checked against anything; the flow only
//! distinguishes known phones (login) from new ones (registration). The
//! typed API lives on [`UserClient`](crate::clients::UserClient).

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::User;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, ResourceClient<User>) {
    ResourceActor::new(buffer_size)
}
