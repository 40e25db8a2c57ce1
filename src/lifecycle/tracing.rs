//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`. Module paths are hidden (`with_target(false)`); actor lines
//! carry an `entity_type` field instead.
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle, creates, checkouts
//! RUST_LOG=debug cargo run    # every request, with payloads
//! RUST_LOG=pedeai::framework=debug cargo run
//! ```
//!
//! A checkout at `info` reads roughly:
//!
//! ```text
//! INFO place_order{user_id=user_1 cart_id=cart_1}: Sending place_order to actor
//! INFO Action ok entity_type="CartSession" id=cart_1
//! INFO Cart cleared after checkout order_id=order_1 cart_id=cart_1
//! INFO Created entity_type="Order" id=order_1 size=1
//! ```

/// Safe to call once per process; a second call panics in `init`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
