// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Postings command - filter the job postings catalog by tags

use super::Output;
use screenstate::catalog;
use screenstate::filter::{FilterEvent, FilterStore};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

/// Arguments for the postings command
#[derive(Debug, Default)]
pub struct PostingsArgs {
    /// Catalog file; the bundled catalog when absent
    pub catalog: Option<PathBuf>,
    /// Tags to filter by, applied in order
    pub filters: Vec<String>,
    /// Tags to drop again after adding the filters
    pub remove: Vec<String>,
    /// List the catalog's tags instead of postings
    pub tags: bool,
}

/// Run the postings command
pub fn run(args: PostingsArgs, out: Output) -> Result<()> {
    let postings = match &args.catalog {
        Some(path) => catalog::load_postings(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => catalog::bundled_postings().context("Bundled catalog is malformed")?,
    };
    info!("Loaded {} postings", postings.len());

    let mut store = FilterStore::new(postings);

    if args.tags {
        let tags = store.all_tags();
        if out.json {
            return out.print_json(&tags);
        }
        println!("{}", out.heading(&format!("Tags ({}):", tags.len())));
        for tag in tags {
            println!("  {tag}");
        }
        return Ok(());
    }

    let events = args
        .filters
        .into_iter()
        .map(FilterEvent::Add)
        .chain(args.remove.into_iter().map(FilterEvent::Remove));
    for event in events {
        store.apply(event);
    }

    let snapshot = store.snapshot();
    if out.json {
        return out.print_json(&snapshot);
    }

    if !snapshot.active_filters.is_empty() {
        println!("Filters: {}", snapshot.active_filters.join(", "));
    }
    println!(
        "{}",
        out.heading(&format!("Postings ({} of {}):", snapshot.visible.len(), store.catalog().len()))
    );
    for posting in &snapshot.visible {
        let mut pills = Vec::new();
        if posting.new {
            pills.push("NEW");
        }
        if posting.featured {
            pills.push("FEATURED");
        }
        let pills = if pills.is_empty() { String::new() } else { format!(" [{}]", pills.join(", ")) };

        println!("  #{} {} - {}{}", posting.id, posting.company, posting.position, pills);
        println!("      {} · {} · {}", posting.posted_at, posting.contract, posting.location);
        println!("      {}", posting.tags().collect::<Vec<_>>().join(" "));
    }

    Ok(())
}
