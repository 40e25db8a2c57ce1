//! Generic service actors.
//!
//! - [`ActorEntity`]: what a resource implements
//! - [`ResourceActor`]: the task owning all resources of a kind
//! - [`ResourceClient`]: cloneable handle that sends it requests
//! - [`FrameworkError`]: channel and hook failures
//!
//! [`mock`] holds test doubles for clients.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
