// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Interactive pricing: pageview slider with a yearly billing discount

use crate::money::format_usd;
use crate::types::{PricingTier, PRICING_TIERS};
use serde::{Deserialize, Serialize};

/// Discount applied to yearly billing
pub const YEARLY_DISCOUNT: f64 = 0.25;

/// Billing period toggle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Billing {
    /// Billed monthly
    #[default]
    Monthly,
    /// Billed yearly at a discount
    Yearly,
}

impl Billing {
    /// Label shown after the price
    #[must_use]
    pub fn period(&self) -> &'static str {
        match self {
            Self::Monthly => "month",
            Self::Yearly => "year",
        }
    }
}

/// Pricing screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingCalculator {
    index: usize,
    billing: Billing,
}

impl Default for PricingCalculator {
    fn default() -> Self {
        Self {
            index: 2,
            billing: Billing::Monthly,
        }
    }
}

impl PricingCalculator {
    /// Start on the middle tier, billed monthly
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the slider to `index`, clamped to the tier range
    pub fn set_index(&mut self, index: usize) {
        self.index = index.min(PRICING_TIERS.len() - 1);
    }

    /// Move the slider from a continuous position
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_slider_value(&mut self, value: f64) {
        let index = if value.is_finite() { value.round().max(0.0) as usize } else { 0 };
        self.set_index(index);
    }

    /// Flip between monthly and yearly
    pub fn toggle_billing(&mut self) {
        self.billing = match self.billing {
            Billing::Monthly => Billing::Yearly,
            Billing::Yearly => Billing::Monthly,
        };
    }

    /// Set the billing period
    pub fn set_billing(&mut self, billing: Billing) {
        self.billing = billing;
    }

    /// Slider index
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Billing period
    #[must_use]
    pub fn billing(&self) -> Billing {
        self.billing
    }

    /// Selected tier
    #[must_use]
    pub fn tier(&self) -> PricingTier {
        PRICING_TIERS[self.index]
    }

    /// Price after any yearly discount
    #[must_use]
    pub fn price(&self) -> f64 {
        let monthly = self.tier().monthly_price;
        match self.billing {
            Billing::Monthly => monthly,
            Billing::Yearly => monthly - monthly * YEARLY_DISCOUNT,
        }
    }

    /// Price line, e.g. "$16.00 / month"
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("{} / {}", format_usd(self.price()), self.billing.period())
    }

    /// Heading above the slider, e.g. "100K PAGEVIEWS"
    #[must_use]
    pub fn pageviews_label(&self) -> String {
        format!("{} PAGEVIEWS", self.tier().pageviews)
    }
}
