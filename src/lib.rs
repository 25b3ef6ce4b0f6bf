// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Screenstate library - state and derived values for small practice screens
//!
//! Every component here is a plain, single-owner value with synchronous
//! transitions. A presentation layer feeds it events (tap, text edit) and
//! renders the snapshots it hands back.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod card;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod expenses;
pub mod filter;
pub mod money;
pub mod pricing;
pub mod product;
pub mod split;

pub use error::{Error, Result};

/// Core data types shared by the screens
pub mod types {
    use serde::{Deserialize, Serialize};
    use uuid::Uuid;

    // =========================================================================
    // Postings
    // =========================================================================

    /// A job posting from the postings catalog
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Posting {
        /// Unique identifier within a catalog
        pub id: u32,
        /// Hiring company
        pub company: String,
        /// Logo asset name
        #[serde(default)]
        pub logo: String,
        /// Shown with a "New" pill
        #[serde(default)]
        pub new: bool,
        /// Shown with a "Featured" pill
        #[serde(default)]
        pub featured: bool,
        /// Job title
        pub position: String,
        /// Role category (Frontend, Backend, Fullstack)
        pub role: String,
        /// Seniority level (Junior, Midweight, Senior)
        pub level: String,
        /// Relative age of the posting, e.g. "1d ago"
        #[serde(default)]
        pub posted_at: String,
        /// Contract type
        #[serde(default)]
        pub contract: String,
        /// Location constraint
        #[serde(default)]
        pub location: String,
        /// Languages used
        #[serde(default)]
        pub languages: Vec<String>,
        /// Tools used
        #[serde(default)]
        pub tools: Vec<String>,
    }

    impl Posting {
        /// Tags in display order: role, level, languages, then tools
        pub fn tags(&self) -> impl Iterator<Item = &str> {
            [self.role.as_str(), self.level.as_str()]
                .into_iter()
                .chain(self.languages.iter().map(String::as_str))
                .chain(self.tools.iter().map(String::as_str))
        }

        /// Whether this posting carries `tag`
        #[must_use]
        pub fn has_tag(&self, tag: &str) -> bool {
            self.tags().any(|t| t == tag)
        }
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// A line in the shopping cart
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct CartItem {
        /// Generated identity, used for removal
        pub id: Uuid,
        /// Product title; at most one line per title
        pub title: String,
        /// Thumbnail asset name
        #[serde(default)]
        pub thumbnail: String,
        /// Unit price
        pub price: f64,
        /// Units in the cart
        pub quantity: u32,
    }

    impl CartItem {
        /// Create an item with a fresh id
        #[must_use]
        pub fn new(title: impl Into<String>, price: f64, quantity: u32) -> Self {
            Self {
                id: Uuid::new_v4(),
                title: title.into(),
                thumbnail: String::new(),
                price,
                quantity,
            }
        }

        /// Set the thumbnail asset
        #[must_use]
        pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
            self.thumbnail = thumbnail.into();
            self
        }

        /// Price times quantity
        #[must_use]
        pub fn subtotal(&self) -> f64 {
            self.price * f64::from(self.quantity)
        }
    }

    // =========================================================================
    // Pricing
    // =========================================================================

    /// A pageview tier on the pricing slider
    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    pub struct PricingTier {
        /// Pageview label, e.g. "100K"
        pub pageviews: &'static str,
        /// Monthly price in dollars
        pub monthly_price: f64,
    }

    /// The tiers offered on the pricing screen, cheapest first
    pub const PRICING_TIERS: [PricingTier; 5] = [
        PricingTier { pageviews: "10K", monthly_price: 8.0 },
        PricingTier { pageviews: "50K", monthly_price: 12.0 },
        PricingTier { pageviews: "100K", monthly_price: 16.0 },
        PricingTier { pageviews: "500K", monthly_price: 24.0 },
        PricingTier { pageviews: "1M", monthly_price: 36.0 },
    ];

    // =========================================================================
    // Expenses
    // =========================================================================

    /// Day of the week as shown on the spending chart
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum Weekday {
        /// Monday
        #[serde(rename = "mon")]
        Monday,
        /// Tuesday
        #[serde(rename = "tues")]
        Tuesday,
        /// Wednesday
        #[serde(rename = "wed")]
        Wednesday,
        /// Thursday
        #[serde(rename = "thurs")]
        Thursday,
        /// Friday
        #[serde(rename = "fri")]
        Friday,
        /// Saturday
        #[serde(rename = "sat")]
        Saturday,
        /// Sunday
        #[serde(rename = "sun")]
        Sunday,
    }

    impl Weekday {
        /// All days, Monday first
        pub const ALL: [Self; 7] = [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ];

        /// Axis label for this day
        #[must_use]
        pub fn label(&self) -> &'static str {
            match self {
                Self::Monday => "mon",
                Self::Tuesday => "tues",
                Self::Wednesday => "wed",
                Self::Thursday => "thurs",
                Self::Friday => "fri",
                Self::Saturday => "sat",
                Self::Sunday => "sun",
            }
        }

        /// Parse an axis label (case-insensitive)
        #[must_use]
        pub fn from_label(label: &str) -> Option<Self> {
            let label = label.trim().to_lowercase();
            Self::ALL.into_iter().find(|d| d.label() == label)
        }
    }

    /// Amount spent on one day
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Spending {
        /// Day of the week
        pub day: Weekday,
        /// Amount spent in dollars
        pub amount: f64,
    }

    impl Spending {
        /// The mock spending data for the last seven days
        #[must_use]
        pub fn last_seven_days() -> Vec<Self> {
            [17.45, 34.91, 52.36, 31.07, 23.39, 43.28, 25.48]
                .into_iter()
                .zip(Weekday::ALL)
                .map(|(amount, day)| Self { day, amount })
                .collect()
        }
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::card::{CardField, CardForm, FieldKind, FieldPhase, FieldStatus, FormField};
    pub use crate::cart::Cart;
    pub use crate::expenses::ExpensesChart;
    pub use crate::filter::{FilterEvent, FilterSnapshot, FilterStore};
    pub use crate::pricing::{Billing, PricingCalculator};
    pub use crate::product::ProductDetail;
    pub use crate::split::{SplitCalculator, SplitEvent, SplitSnapshot, TipRate, TipSelection};
    pub use crate::types::*;
    pub use crate::{Error, Result};
}
