//! Catalog values handed to the cart by the browsing screens.
//!
//! Products and restaurants come from a static catalog; this crate only reads
//! them.

use super::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Catalog identifier of a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Catalog identifier of a restaurant (or market, pharmacy, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestaurantId(pub String);

impl From<&str> for RestaurantId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A menu entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: Money,
    pub image: Option<String>,
    pub available: bool,
    pub restaurant_id: RestaurantId,
}

impl Product {
    /// An available product with no description or image.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        restaurant_id: impl Into<RestaurantId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            price,
            image: None,
            available: true,
            restaurant_id: restaurant_id.into(),
        }
    }
}

/// A place that sells products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub category: String,
    pub image: String,
    pub is_open: bool,
    /// Display estimate such as `"35-55 min"`.
    pub delivery_time: String,
    pub delivery_fee: Money,
    pub minimum_order: Option<Money>,
    pub rating: Option<f32>,
}

impl Restaurant {
    /// An open restaurant with no minimum order, rating or image.
    pub fn new(
        id: impl Into<RestaurantId>,
        name: impl Into<String>,
        category: impl Into<String>,
        delivery_fee: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            image: String::new(),
            is_open: true,
            delivery_time: String::new(),
            delivery_fee,
            minimum_order: None,
            rating: None,
        }
    }

    pub fn with_minimum_order(mut self, minimum: Money) -> Self {
        self.minimum_order = Some(minimum);
        self
    }

    pub fn closed(mut self) -> Self {
        self.is_open = false;
        self
    }
}

/// Whether the product card should let `product` into the cart.
///
/// The cart itself accepts anything; this is the gate the screens apply first.
pub fn can_add(product: &Product, restaurant: &Restaurant) -> bool {
    restaurant.is_open && product.available
}

/// Result of a category search, open places first.
#[derive(Debug, PartialEq)]
pub struct Listing<'a> {
    pub open: Vec<&'a Restaurant>,
    pub closed: Vec<&'a Restaurant>,
}

/// Filters `places` by a free-text query against name and category.
///
/// Matching is a case-insensitive substring test on the trimmed query; a
/// blank query keeps every place. Input order is preserved within each group.
pub fn search<'a>(places: &'a [Restaurant], query: &str) -> Listing<'a> {
    let query = query.trim().to_lowercase();
    let (open, closed) = places
        .iter()
        .filter(|place| {
            query.is_empty()
                || place.name.to_lowercase().contains(&query)
                || place.category.to_lowercase().contains(&query)
        })
        .partition(|place| place.is_open);
    Listing { open, closed }
}
