//! The single-restaurant shopping cart.
//!
//! [`CartStore`] holds at most one [`Cart`]. A cart always has a restaurant
//! and at least one line item; emptying it makes the store forget it
//! entirely. Items from a second restaurant never mix with the first: adding
//! one replaces the whole cart.

use super::catalog::{Product, ProductId, Restaurant};
use super::money::Money;
use serde::{Deserialize, Serialize};

/// A product and how many of it. `quantity` is never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// `price × quantity`.
    pub fn line_total(&self) -> Money {
        self.product.price * Money::from(self.quantity)
    }
}

/// Line items from one restaurant, in the order they were first added.
///
/// Only [`CartStore`] builds or mutates carts, which keeps every cart
/// non-empty and free of duplicate products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    restaurant: Restaurant,
    items: Vec<CartItem>,
}

impl Cart {
    fn with_item(restaurant: Restaurant, product: Product, quantity: u32) -> Self {
        Self {
            restaurant,
            items: vec![CartItem { product, quantity }],
        }
    }

    pub fn restaurant(&self) -> &Restaurant {
        &self.restaurant
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn item(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.product.id == product_id)
    }

    /// Sum of all quantities, capped at `u32::MAX`.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, item| count.saturating_add(item.quantity))
    }

    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Subtotal plus the restaurant's delivery fee.
    pub fn total(&self) -> Money {
        self.subtotal() + self.restaurant.delivery_fee
    }

    /// True when the restaurant sets no minimum or the subtotal reaches it.
    pub fn minimum_order_met(&self) -> bool {
        self.missing_for_minimum().is_none()
    }

    /// How much more the subtotal needs to reach the restaurant's minimum.
    pub fn missing_for_minimum(&self) -> Option<Money> {
        let minimum = self.restaurant.minimum_order?;
        let subtotal = self.subtotal();
        (subtotal < minimum).then(|| minimum - subtotal)
    }
}

/// Owner of the current cart, if any.
///
/// Every operation is total: bad quantities are normalised and unknown
/// products are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartStore {
    cart: Option<Cart>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> Option<&Cart> {
        self.cart.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_none()
    }

    /// Adds `quantity` units of `product` sold by `restaurant`.
    ///
    /// A cart holding another restaurant's items is discarded and replaced by
    /// a cart with just this product. An existing line for the product gets
    /// its quantity increased; otherwise a new line is appended. Adding zero
    /// units changes nothing.
    pub fn add_item(&mut self, product: Product, restaurant: Restaurant, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let same_restaurant = self
            .cart
            .as_mut()
            .filter(|cart| cart.restaurant.id == restaurant.id);
        let Some(cart) = same_restaurant else {
            self.cart = Some(Cart::with_item(restaurant, product, quantity));
            return;
        };
        match cart.items.iter_mut().find(|item| item.product.id == product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => cart.items.push(CartItem { product, quantity }),
        }
    }

    /// [`add_item`](Self::add_item) with a single unit.
    pub fn add_one(&mut self, product: Product, restaurant: Restaurant) {
        self.add_item(product, restaurant, 1);
    }

    /// Drops the line for `product_id`. Removing the last line empties the
    /// store. Unknown products are ignored.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        if let Some(cart) = &mut self.cart {
            cart.items.retain(|item| &item.product.id != product_id);
            if cart.items.is_empty() {
                self.cart = None;
            }
        }
    }

    /// Sets the quantity of an existing line. Zero or less removes the line.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(item) = self
            .cart
            .as_mut()
            .and_then(|cart| cart.items.iter_mut().find(|item| &item.product.id == product_id))
        {
            item.quantity = quantity;
        }
    }

    pub fn clear_cart(&mut self) {
        self.cart = None;
    }

    /// Units of `product_id` in the cart, `0` if none.
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.cart
            .as_ref()
            .and_then(|cart| cart.item(product_id))
            .map_or(0, |item| item.quantity)
    }

    pub fn item_count(&self) -> u32 {
        self.cart.as_ref().map_or(0, Cart::item_count)
    }

    pub fn subtotal(&self) -> Money {
        self.cart.as_ref().map_or(Money::ZERO, Cart::subtotal)
    }

    pub fn total(&self) -> Money {
        self.cart.as_ref().map_or(Money::ZERO, Cart::total)
    }
}
