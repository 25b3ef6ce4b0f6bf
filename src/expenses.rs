// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Weekly spending chart with tap-to-select bars

use crate::types::{Spending, Weekday};
use serde::Serialize;

/// Chart state: the week's bars and the tapped day, if any
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpensesChart {
    spendings: Vec<Spending>,
    selected: Option<Weekday>,
}

impl Default for ExpensesChart {
    fn default() -> Self {
        Self::new(Spending::last_seven_days())
    }
}

impl ExpensesChart {
    /// Chart over `spendings` with nothing selected
    #[must_use]
    pub fn new(spendings: Vec<Spending>) -> Self {
        Self {
            spendings,
            selected: None,
        }
    }

    /// Tap a bar. Tapping the selected bar again clears the selection.
    pub fn select(&mut self, day: Weekday) {
        self.selected = if self.selected == Some(day) { None } else { Some(day) };
    }

    /// Currently selected day
    #[must_use]
    pub fn selected(&self) -> Option<Weekday> {
        self.selected
    }

    /// Amount for the selected day (shown as the bar annotation)
    #[must_use]
    pub fn selected_amount(&self) -> Option<f64> {
        let day = self.selected?;
        self.spendings.iter().find(|s| s.day == day).map(|s| s.amount)
    }

    /// Bars in display order
    #[must_use]
    pub fn spendings(&self) -> &[Spending] {
        &self.spendings
    }

    /// Sum over the week
    #[must_use]
    pub fn total(&self) -> f64 {
        self.spendings.iter().map(|s| s.amount).sum()
    }

    /// Day with the largest amount; the first one on ties
    #[must_use]
    pub fn peak_day(&self) -> Option<Weekday> {
        self.spendings
            .iter()
            .fold(None, |best: Option<&Spending>, s| match best {
                Some(b) if b.amount >= s.amount => Some(b),
                _ => Some(s),
            })
            .map(|s| s.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_toggles() {
        let mut chart = ExpensesChart::default();
        chart.select(Weekday::Wednesday);
        assert_eq!(chart.selected_amount(), Some(52.36));

        chart.select(Weekday::Friday);
        assert_eq!(chart.selected(), Some(Weekday::Friday));

        chart.select(Weekday::Friday);
        assert_eq!(chart.selected(), None);
        assert_eq!(chart.selected_amount(), None);
    }

    #[test]
    fn test_peak_and_total() {
        let chart = ExpensesChart::default();
        assert_eq!(chart.peak_day(), Some(Weekday::Wednesday));
        assert!((chart.total() - 227.94).abs() < 1e-9);
    }

    #[test]
    fn test_empty_chart() {
        let chart = ExpensesChart::new(vec![]);
        assert_eq!(chart.peak_day(), None);
        assert_eq!(chart.total(), 0.0);
    }

    #[test]
    fn test_weekday_labels() {
        assert_eq!(Weekday::from_label("TUES"), Some(Weekday::Tuesday));
        assert_eq!(Weekday::from_label("tue"), None);
        assert_eq!(Weekday::Thursday.label(), "thurs");
    }
}
