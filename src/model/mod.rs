//! Plain data and the pure rules over it.
//!
//! Nothing here does I/O. The service modules wrap these types in actors.

pub mod cart;
pub mod catalog;
pub mod money;
pub mod order;
pub mod payment;
pub mod session;
pub mod user;

pub use cart::*;
pub use catalog::{Product, ProductId, Restaurant, RestaurantId};
pub use money::Money;
pub use order::*;
pub use payment::PaymentMethod;
pub use session::*;
pub use user::*;
