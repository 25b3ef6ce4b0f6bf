// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Expenses command - the last seven days of spending

use super::Output;
use screenstate::expenses::ExpensesChart;
use screenstate::money::format_usd;
use screenstate::types::Weekday;
use anyhow::{anyhow, Result};

/// Run the expenses command
pub fn run(select: Option<String>, out: Output) -> Result<()> {
    let mut chart = ExpensesChart::default();
    if let Some(label) = select {
        let day = Weekday::from_label(&label).ok_or_else(|| {
            let valid: Vec<&str> = Weekday::ALL.iter().map(Weekday::label).collect();
            anyhow!("Unknown day: {}. Valid: {}", label, valid.join(", "))
        })?;
        chart.select(day);
    }

    if out.json {
        return out.print_json(&chart);
    }

    println!("{}", out.heading("Spending - Last 7 days"));
    let peak = chart.peak_day();
    for spending in chart.spendings() {
        let amount = format_usd(spending.amount);
        let amount = if Some(spending.day) == chart.selected() {
            out.good(&amount)
        } else {
            amount
        };
        let marker = if Some(spending.day) == peak { " *" } else { "" };
        println!("  {:<6}{:>10}{}", spending.day.label(), amount, marker);
    }
    println!("  Total {}", format_usd(chart.total()));
    Ok(())
}
