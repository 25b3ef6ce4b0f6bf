// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Benchmarks for filter recomputation and split derivation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use screenstate::catalog::bundled_postings;
use screenstate::filter::FilterStore;
use screenstate::split::{SplitCalculator, TipRate};
use screenstate::types::Posting;

/// The bundled catalog repeated with fresh ids
fn large_catalog(copies: u32) -> Vec<Posting> {
    let base = bundled_postings().unwrap();
    (0..copies)
        .flat_map(|n| {
            base.iter().cloned().map(move |mut p| {
                p.id += n * 1000;
                p
            })
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let catalog = large_catalog(500);

    c.bench_function("filter_add_remove_5000", |b| {
        let mut store = FilterStore::new(catalog.clone());
        b.iter(|| {
            store.add_filter(black_box("JavaScript"));
            store.add_filter(black_box("Junior"));
            store.remove_filter(black_box("Junior"));
            store.clear_filters();
        });
    });
}

fn bench_split(c: &mut Criterion) {
    let mut calc = SplitCalculator::new();
    calc.set_bill_amount("142.55");
    calc.set_people_count("5");
    calc.select_percentage_tip(TipRate::Fifteen);

    c.bench_function("split_snapshot", |b| b.iter(|| black_box(calc.snapshot())));
}

criterion_group!(benches, bench_filter, bench_split);
criterion_main!(benches);
