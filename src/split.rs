// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Bill splitter: tip and total per person from free-text inputs
//!
//! Inputs are kept exactly as typed and parsed on every read. Anything that
//! does not parse counts as zero, and a zero head count zeroes every derived
//! amount.

use crate::money::{divide_or_zero, format_usd, parse_amount};
use serde::{Deserialize, Serialize};
use tracing::debug;

// =============================================================================
// Tip selection
// =============================================================================

/// One of the fixed tip buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TipRate {
    /// 5%
    #[serde(rename = "5%")]
    Five,
    /// 10%
    #[serde(rename = "10%")]
    Ten,
    /// 15%
    #[serde(rename = "15%")]
    Fifteen,
    /// 25%
    #[serde(rename = "25%")]
    TwentyFive,
    /// 50%
    #[serde(rename = "50%")]
    Fifty,
}

impl TipRate {
    /// Every rate, in button order
    pub const ALL: [Self; 5] = [Self::Five, Self::Ten, Self::Fifteen, Self::TwentyFive, Self::Fifty];

    /// Whole percentage
    #[must_use]
    pub fn percent(&self) -> u8 {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Fifteen => 15,
            Self::TwentyFive => 25,
            Self::Fifty => 50,
        }
    }

    /// Fraction of the bill, e.g. `0.25`
    #[must_use]
    pub fn rate(&self) -> f64 {
        f64::from(self.percent()) / 100.0
    }

    /// Button label, e.g. "25%"
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}%", self.percent())
    }

    /// Look up a rate by whole percentage
    #[must_use]
    pub fn from_percent(percent: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.percent() == percent)
    }
}

/// Tip mode: a fixed rate or a custom total tip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum TipSelection {
    /// Percentage of the bill
    Percentage(TipRate),
    /// Absolute total tip for the whole table, as typed
    Custom(String),
}

impl Default for TipSelection {
    fn default() -> Self {
        Self::Custom(String::new())
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// An event from the splitter screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitEvent {
    /// Bill field edited
    BillAmount(String),
    /// People field edited
    PeopleCount(String),
    /// A tip button was tapped
    SelectTip(TipRate),
    /// Custom tip field edited
    CustomTip(String),
    /// Reset button tapped
    Reset,
}

/// Derived values ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitSnapshot {
    /// Bill text as typed
    pub bill_amount: String,
    /// People text as typed
    pub people_count: String,
    /// Current tip mode
    pub tip: TipSelection,
    /// Tip owed by each person
    pub tip_per_person: f64,
    /// Bill plus tip owed by each person
    pub total_per_person: f64,
    /// `tip_per_person` formatted as dollars
    pub tip_per_person_display: String,
    /// `total_per_person` formatted as dollars
    pub total_per_person_display: String,
}

/// Bill splitter state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitCalculator {
    bill_amount: String,
    people_count: String,
    tip: TipSelection,
}

impl SplitCalculator {
    /// Empty calculator with a zero custom tip
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event
    pub fn apply(&mut self, event: SplitEvent) {
        debug!("Split event: {:?}", event);
        match event {
            SplitEvent::BillAmount(text) => self.bill_amount = text,
            SplitEvent::PeopleCount(text) => self.people_count = text,
            SplitEvent::SelectTip(rate) => self.tip = TipSelection::Percentage(rate),
            SplitEvent::CustomTip(text) => self.tip = TipSelection::Custom(text),
            SplitEvent::Reset => *self = Self::default(),
        }
    }

    /// Replace the bill text
    pub fn set_bill_amount(&mut self, text: impl Into<String>) {
        self.apply(SplitEvent::BillAmount(text.into()));
    }

    /// Replace the people text
    pub fn set_people_count(&mut self, text: impl Into<String>) {
        self.apply(SplitEvent::PeopleCount(text.into()));
    }

    /// Switch to a fixed rate, discarding any custom amount
    pub fn select_percentage_tip(&mut self, rate: TipRate) {
        self.apply(SplitEvent::SelectTip(rate));
    }

    /// Switch to a custom total tip
    pub fn set_custom_tip(&mut self, amount: impl Into<String>) {
        self.apply(SplitEvent::CustomTip(amount.into()));
    }

    /// Clear both inputs and return to a zero custom tip
    pub fn reset(&mut self) {
        self.apply(SplitEvent::Reset);
    }

    /// Bill text as typed
    #[must_use]
    pub fn bill_amount(&self) -> &str {
        &self.bill_amount
    }

    /// People text as typed
    #[must_use]
    pub fn people_count(&self) -> &str {
        &self.people_count
    }

    /// Current tip mode
    #[must_use]
    pub fn tip(&self) -> &TipSelection {
        &self.tip
    }

    /// Whether there is anything for reset to clear
    #[must_use]
    pub fn can_reset(&self) -> bool {
        *self != Self::default()
    }

    fn bill(&self) -> f64 {
        parse_amount(&self.bill_amount)
    }

    fn people(&self) -> f64 {
        parse_amount(&self.people_count)
    }

    fn total_tip(&self) -> f64 {
        match &self.tip {
            TipSelection::Percentage(rate) => self.bill() * rate.rate(),
            TipSelection::Custom(text) => parse_amount(text),
        }
    }

    /// Tip owed by each person
    #[must_use]
    pub fn tip_per_person(&self) -> f64 {
        divide_or_zero(self.total_tip(), self.people())
    }

    /// Bill plus tip owed by each person
    #[must_use]
    pub fn total_per_person(&self) -> f64 {
        let people = self.people();
        divide_or_zero(self.bill() + self.tip_per_person() * people, people)
    }

    /// Snapshot with derived values
    #[must_use]
    pub fn snapshot(&self) -> SplitSnapshot {
        let tip_per_person = self.tip_per_person();
        let total_per_person = self.total_per_person();
        SplitSnapshot {
            bill_amount: self.bill_amount.clone(),
            people_count: self.people_count.clone(),
            tip: self.tip.clone(),
            tip_per_person,
            total_per_person,
            tip_per_person_display: format_usd(tip_per_person),
            total_per_person_display: format_usd(total_per_person),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculator(bill: &str, people: &str) -> SplitCalculator {
        let mut calc = SplitCalculator::new();
        calc.set_bill_amount(bill);
        calc.set_people_count(people);
        calc
    }

    #[test]
    fn test_percentage_tip() {
        let mut calc = calculator("100", "4");
        calc.select_percentage_tip(TipRate::TwentyFive);

        assert_eq!(calc.tip_per_person(), 6.25);
        assert_eq!(calc.total_per_person(), 31.25);
    }

    #[test]
    fn test_custom_tip_is_a_table_total() {
        let mut calc = calculator("142.55", "5");
        calc.set_custom_tip("20");

        assert!((calc.tip_per_person() - 4.0).abs() < 1e-9);
        assert!((calc.total_per_person() - 32.51).abs() < 1e-9);
    }

    #[test]
    fn test_zero_people_zeroes_everything() {
        for people in ["0", "", "abc", "-2"] {
            let mut calc = calculator("100", people);
            calc.select_percentage_tip(TipRate::Fifty);
            assert_eq!(calc.tip_per_person(), 0.0, "people = {people:?}");
            assert_eq!(calc.total_per_person(), 0.0, "people = {people:?}");
        }
    }

    #[test]
    fn test_zero_people_zeroes_custom_tip() {
        for people in ["0", "", "abc", "-2"] {
            let mut calc = calculator("100", people);
            calc.set_custom_tip("20");
            assert_eq!(calc.tip_per_person(), 0.0, "people = {people:?}");
            assert_eq!(calc.total_per_person(), 0.0, "people = {people:?}");
        }
    }

    #[test]
    fn test_extreme_inputs_stay_finite() {
        let mut calc = calculator("100", "1e-320");
        calc.select_percentage_tip(TipRate::Fifty);
        assert_eq!(calc.tip_per_person(), 0.0);
        assert_eq!(calc.total_per_person(), 0.0);
        assert_eq!(calc.snapshot().total_per_person_display, "$0.00");

        let mut calc = calculator("1.7e308", "1");
        calc.select_percentage_tip(TipRate::Fifty);
        assert_eq!(calc.tip_per_person(), 0.85e308);
        assert!(calc.total_per_person().is_finite());
        assert!(!calc.snapshot().tip_per_person_display.contains("inf"));
    }

    #[test]
    fn test_unparseable_bill_is_zero() {
        let mut calc = calculator("12a", "2");
        calc.select_percentage_tip(TipRate::Ten);
        assert_eq!(calc.tip_per_person(), 0.0);
        assert_eq!(calc.total_per_person(), 0.0);
    }

    #[test]
    fn test_selecting_rate_discards_custom() {
        let mut calc = calculator("100", "2");
        calc.set_custom_tip("30");
        calc.select_percentage_tip(TipRate::Ten);

        assert_eq!(calc.tip(), &TipSelection::Percentage(TipRate::Ten));
        assert_eq!(calc.tip_per_person(), 5.0);
    }

    #[test]
    fn test_reset() {
        let mut calc = calculator("100", "4");
        calc.select_percentage_tip(TipRate::Fifteen);
        assert!(calc.can_reset());

        calc.reset();

        assert_eq!(calc.bill_amount(), "");
        assert_eq!(calc.people_count(), "");
        assert_eq!(calc.tip(), &TipSelection::Custom(String::new()));
        assert!(!calc.can_reset());
    }

    #[test]
    fn test_snapshot_display() {
        let mut calc = calculator("100", "4");
        calc.select_percentage_tip(TipRate::TwentyFive);
        let snap = calc.snapshot();

        assert_eq!(snap.tip_per_person_display, "$6.25");
        assert_eq!(snap.total_per_person_display, "$31.25");

        let empty = SplitCalculator::new().snapshot();
        assert_eq!(empty.tip_per_person_display, "$0.00");
        assert_eq!(empty.total_per_person_display, "$0.00");
    }

    #[test]
    fn test_tip_rate_lookup() {
        assert_eq!(TipRate::from_percent(15), Some(TipRate::Fifteen));
        assert_eq!(TipRate::from_percent(20), None);
        assert_eq!(TipRate::Fifty.label(), "50%");
        assert_eq!(TipRate::TwentyFive.rate(), 0.25);
    }
}
