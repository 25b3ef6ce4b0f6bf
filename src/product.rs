// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Product detail: quantity stepper, image pager and add-to-cart

use crate::cart::Cart;
use crate::types::CartItem;
use tracing::debug;

/// Product detail screen state
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    title: String,
    price: f64,
    images: Vec<String>,
    page: usize,
    quantity: u32,
}

impl ProductDetail {
    /// New product with zero quantity on the first image
    #[must_use]
    pub fn new(title: impl Into<String>, price: f64, images: Vec<String>) -> Self {
        Self {
            title: title.into(),
            price,
            images,
            page: 0,
            quantity: 0,
        }
    }

    /// The sneaker product shown on the demo screen
    #[must_use]
    pub fn sneakers() -> Self {
        Self::new(
            "Fall Limited Edition Sneakers",
            125.0,
            (1..=4).map(|i| format!("shoe{i}")).collect(),
        )
    }

    /// Product title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Unit price
    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Chosen quantity
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Plus button
    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Minus button; stops at zero
    pub fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1);
    }

    /// Index of the image on screen
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Asset name of the image on screen
    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.page).map(String::as_str)
    }

    /// Jump to `page`, clamped to the image range
    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.images.len().saturating_sub(1));
    }

    /// Right chevron
    pub fn next(&mut self) {
        self.set_page(self.page.saturating_add(1));
    }

    /// Left chevron
    pub fn previous(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// The add button is disabled at zero quantity
    #[must_use]
    pub fn can_add_to_cart(&self) -> bool {
        self.quantity > 0
    }

    /// Put the chosen quantity in `cart`. Returns false when nothing was added.
    pub fn add_to_cart(&self, cart: &mut Cart) -> bool {
        if !self.can_add_to_cart() {
            return false;
        }

        let mut item = CartItem::new(self.title.clone(), self.price, self.quantity);
        if let Some(thumbnail) = self.images.first() {
            item = item.with_thumbnail(thumbnail.clone());
        }
        debug!("Adding {} x{} to cart", self.title, self.quantity);
        cart.add_item(item);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_never_underflows() {
        let mut product = ProductDetail::sneakers();
        product.decrement();
        assert_eq!(product.quantity(), 0);

        product.increment();
        product.increment();
        product.decrement();
        assert_eq!(product.quantity(), 1);
    }

    #[test]
    fn test_pager_clamps() {
        let mut product = ProductDetail::sneakers();
        product.previous();
        assert_eq!(product.page(), 0);

        for _ in 0..10 {
            product.next();
        }
        assert_eq!(product.page(), 3);
        assert_eq!(product.current_image(), Some("shoe4"));
    }

    #[test]
    fn test_pager_without_images() {
        let mut product = ProductDetail::new("Bare", 1.0, vec![]);
        product.next();
        assert_eq!(product.page(), 0);
        assert_eq!(product.current_image(), None);
    }

    #[test]
    fn test_add_to_cart() {
        let mut cart = Cart::new();
        let mut product = ProductDetail::sneakers();

        assert!(!product.add_to_cart(&mut cart));
        assert!(cart.is_empty());

        product.increment();
        assert!(product.add_to_cart(&mut cart));
        product.increment();
        product.increment();
        assert!(product.add_to_cart(&mut cart));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.items()[0].thumbnail, "shoe1");
    }
}
