// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Shopping cart keyed by product title

use crate::types::CartItem;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

/// Cart lines in the order they were first added
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Empty cart
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item. A line with the same title takes the new quantity
    /// instead of gaining a second row.
    pub fn add_item(&mut self, item: CartItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.title == item.title) {
            debug!("Updating {} quantity {} -> {}", existing.title, existing.quantity, item.quantity);
            existing.quantity = item.quantity;
        } else {
            debug!("Adding {} x{}", item.title, item.quantity);
            self.items.push(item);
        }
    }

    /// Remove the line with `id`, if any
    pub fn remove_item(&mut self, id: Uuid) {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        if self.items.len() < before {
            debug!("Removed cart item {}", id);
        }
    }

    /// Whether the cart has no lines (shows the empty state)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// All lines
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Find a line by title
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.title == title)
    }

    /// Sum of price times quantity over all lines
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }
}
