// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations
//!
//! Each command builds a screen's state from its arguments, replays them as
//! events and prints the resulting snapshot.

pub mod card;
pub mod cart;
pub mod completions;
pub mod expenses;
pub mod postings;
pub mod pricing;
pub mod split;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

/// How results are printed
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    /// Print the snapshot as JSON instead of text
    pub json: bool,
    /// Use ANSI colours in text output
    pub color: bool,
}

impl Output {
    /// Write `value` as pretty JSON on stdout
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    }

    /// Emphasise a heading
    #[must_use]
    pub fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Mark something good
    #[must_use]
    pub fn good(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    /// Mark something bad
    #[must_use]
    pub fn bad(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }
}
