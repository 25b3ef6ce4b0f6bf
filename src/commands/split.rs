// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Split command - tip and total per person

use super::Output;
use screenstate::split::{SplitCalculator, TipRate};
use anyhow::{bail, Result};

/// Arguments for the split command
#[derive(Debug, Default)]
pub struct SplitArgs {
    /// Bill text
    pub bill: String,
    /// People text
    pub people: String,
    /// Tip button percentage
    pub tip: Option<u8>,
    /// Custom total tip text
    pub custom: Option<String>,
}

/// Run the split command
pub fn run(args: SplitArgs, out: Output) -> Result<()> {
    let mut calc = SplitCalculator::new();
    calc.set_bill_amount(args.bill);
    calc.set_people_count(args.people);

    match (args.tip, args.custom) {
        (Some(_), Some(_)) => bail!("Use either --tip or --custom, not both"),
        (Some(percent), None) => {
            let Some(rate) = TipRate::from_percent(percent) else {
                let valid: Vec<String> = TipRate::ALL.iter().map(|r| r.percent().to_string()).collect();
                bail!("Unknown tip: {}%. Valid: {}", percent, valid.join(", "));
            };
            calc.select_percentage_tip(rate);
        }
        (None, Some(custom)) => calc.set_custom_tip(custom),
        (None, None) => {}
    }

    let snapshot = calc.snapshot();
    if out.json {
        return out.print_json(&snapshot);
    }

    println!("{}", out.heading("Splitter"));
    println!("  Tip Amount / person  {}", out.good(&snapshot.tip_per_person_display));
    println!("  Total / person       {}", out.good(&snapshot.total_per_person_display));
    Ok(())
}
