#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # PedeAí
//!
//! > **Cart and order core of a local food-delivery app.**
//!
//! Customers sign in with a phone number, fill a cart from a single
//! restaurant, pay on delivery and follow their order through a fixed status
//! progression. This crate holds the rules behind those screens and runs the
//! stateful parts as small Tokio actors.
//!
//! ## 🏗️ Design
//!
//! ### Pure rules, actor-owned state
//! Everything that can be decided without I/O lives in [`model`] and
//! [`tracker`] as plain synchronous code: the [`CartStore`](model::CartStore)
//! and its single-restaurant rule, money totals, the
//! [`OrderStatus`](model::OrderStatus) ranks, payment checks, catalog search.
//!
//! Shared state (users, cart sessions, orders) is owned by one
//! [`ResourceActor`](framework::ResourceActor) per kind. Each processes
//! requests sequentially from an `mpsc` channel and replies over `oneshot`,
//! so no locks guard service state.
//!
//! ### Typed errors
//! Each service defines its own `thiserror` enum ([`UserError`](user_actor::UserError),
//! [`CartError`](cart_actor::CartError), [`OrderError`](order_actor::OrderError)).
//! Errors raised inside an actor hook travel back as
//! [`FrameworkError::EntityError`](framework::FrameworkError::EntityError) and
//! are recovered into the service's own type by its client.
//!
//! ### Late-bound context
//! The order actor needs the identity and cart services. They are passed to
//! `run()` when the actor is spawned, not at construction.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: data types and the pure rules over them.
//! - [`tracker`]: status to progress-bar mapping for the tracking screen.
//! - [`framework`]: the generic actor, its client and test doubles.
//! - [`user_actor`], [`cart_actor`], [`order_actor`]: the three services.
//! - [`clients`]: typed handles the presentation layer calls.
//! - [`lifecycle`]: [`AppSystem`](lifecycle::AppSystem) startup/shutdown and
//!   [`setup_tracing`](lifecycle::setup_tracing).
//! - [`config`]: [`AppConfig`](config::AppConfig), read from the environment.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod cart_actor;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod tracker;
pub mod user_actor;
