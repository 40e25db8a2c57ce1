//! Startup, shutdown and logging setup.

pub mod app_system;
pub mod tracing;

pub use app_system::*;
pub use self::tracing::setup_tracing;
