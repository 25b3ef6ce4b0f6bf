// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Parsing and formatting of dollar amounts typed into text fields

/// Parse free-form amount text.
///
/// Empty, non-numeric, negative or non-finite input yields `0.0` so that
/// partially typed values render as `$0.00` instead of failing.
#[must_use]
pub fn parse_amount(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}

/// Format a dollar amount with two decimals, e.g. `$31.25`
#[must_use]
pub fn format_usd(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${value:.2}")
    }
}

/// `value / divisor`, or zero when the divisor is zero or the quotient is
/// not finite
#[must_use]
pub fn divide_or_zero(value: f64, divisor: f64) -> f64 {
    if divisor == 0.0 {
        return 0.0;
    }
    let quotient = value / divisor;
    if quotient.is_finite() {
        quotient
    } else {
        0.0
    }
}
