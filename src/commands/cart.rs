// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Cart command - replay add/remove actions against an empty cart

use super::Output;
use screenstate::cart::Cart;
use screenstate::money::format_usd;
use screenstate::types::CartItem;
use anyhow::{anyhow, bail, Context, Result};

/// Parse `TITLE=PRICExQTY`, e.g. `Sneakers=125x3`
pub fn parse_item(spec: &str) -> Result<CartItem> {
    let (title, rest) = spec
        .rsplit_once('=')
        .ok_or_else(|| anyhow!("Expected TITLE=PRICExQTY, got: {}", spec))?;
    let (price, quantity) = rest
        .split_once('x')
        .ok_or_else(|| anyhow!("Expected PRICExQTY after '=', got: {}", rest))?;

    let title = title.trim();
    if title.is_empty() {
        bail!("Item title is empty: {}", spec);
    }
    let price: f64 = price
        .trim()
        .trim_start_matches('$')
        .parse()
        .with_context(|| format!("Invalid price in {spec}"))?;
    let quantity: u32 = quantity
        .trim()
        .parse()
        .with_context(|| format!("Invalid quantity in {spec}"))?;

    Ok(CartItem::new(title, price, quantity))
}

/// Run the cart command
pub fn run(add: Vec<String>, remove: Vec<String>, out: Output) -> Result<()> {
    let mut cart = Cart::new();
    for spec in &add {
        cart.add_item(parse_item(spec)?);
    }
    for title in &remove {
        match cart.get(title).map(|i| i.id) {
            Some(id) => cart.remove_item(id),
            None => tracing::warn!("{} is not in the cart", title),
        }
    }

    if out.json {
        return out.print_json(&cart);
    }

    if cart.is_empty() {
        println!("Your cart is empty");
        return Ok(());
    }

    println!("{}", out.heading(&format!("Cart ({}):", cart.len())));
    for item in cart.items() {
        println!(
            "  {}  {} x {}  {}",
            item.title,
            format_usd(item.price),
            item.quantity,
            format_usd(item.subtotal())
        );
    }
    println!("Total {}", out.good(&format_usd(cart.total())));
    Ok(())
}
