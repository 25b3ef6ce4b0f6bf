// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Pricing command - price for a pageview tier

use super::Output;
use screenstate::pricing::{Billing, PricingCalculator};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct PricingView {
    pageviews: &'static str,
    billing: Billing,
    price: f64,
    label: String,
}

/// Run the pricing command
pub fn run(tier: Option<usize>, yearly: bool, out: Output) -> Result<()> {
    let mut calc = PricingCalculator::new();
    if let Some(index) = tier {
        calc.set_index(index);
    }
    if yearly {
        calc.set_billing(Billing::Yearly);
    }

    if out.json {
        return out.print_json(&PricingView {
            pageviews: calc.tier().pageviews,
            billing: calc.billing(),
            price: calc.price(),
            label: calc.price_label(),
        });
    }

    println!("{}", out.heading(&calc.pageviews_label()));
    println!("  {}", calc.price_label());
    if calc.billing() == Billing::Yearly {
        println!("  {}", out.good("-25% yearly billing"));
    }
    Ok(())
}
