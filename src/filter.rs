// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Tag filter over the postings catalog
//!
//! Filtering is conjunctive: a posting is visible when its tags contain every
//! active filter. The visible set is recomputed eagerly after each event and is
//! never edited on its own.

use crate::types::Posting;
use indexmap::IndexSet;
use serde::Serialize;
use tracing::debug;

/// An event from the filter screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// A tag was tapped on a posting
    Add(String),
    /// A filter pill was dismissed
    Remove(String),
    /// The clear-all button was tapped
    Clear,
}

/// Immutable view handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSnapshot {
    /// Active filters, oldest first
    pub active_filters: Vec<String>,
    /// Postings matching every active filter, in catalog order
    pub visible: Vec<Posting>,
}

/// Catalog plus active filter set
#[derive(Debug, Clone, Default)]
pub struct FilterStore {
    /// Every posting, in load order
    catalog: Vec<Posting>,
    /// Ordered set of active tags
    filters: IndexSet<String>,
    /// Catalog indices currently visible
    visible: Vec<usize>,
}

impl FilterStore {
    /// Create a store with no active filters; every posting is visible
    #[must_use]
    pub fn new(catalog: Vec<Posting>) -> Self {
        let visible = (0..catalog.len()).collect();
        Self {
            catalog,
            filters: IndexSet::new(),
            visible,
        }
    }

    /// Apply one event and recompute the visible set
    pub fn apply(&mut self, event: FilterEvent) {
        let changed = match event {
            FilterEvent::Add(tag) => {
                debug!("Adding filter: {}", tag);
                self.filters.insert(tag)
            }
            FilterEvent::Remove(tag) => {
                debug!("Removing filter: {}", tag);
                self.filters.shift_remove(&tag)
            }
            FilterEvent::Clear => {
                let had_filters = !self.filters.is_empty();
                self.filters.clear();
                had_filters
            }
        };

        if changed {
            self.recompute();
        }
    }

    /// Add a filter; adding an active tag again is a no-op
    pub fn add_filter(&mut self, tag: impl Into<String>) {
        self.apply(FilterEvent::Add(tag.into()));
    }

    /// Remove a filter; removing an inactive tag is a no-op
    pub fn remove_filter(&mut self, tag: &str) {
        self.apply(FilterEvent::Remove(tag.to_string()));
    }

    /// Drop every filter, making the whole catalog visible
    pub fn clear_filters(&mut self) {
        self.apply(FilterEvent::Clear);
    }

    fn recompute(&mut self) {
        self.visible = matching_indices(&self.catalog, &self.filters);
        debug!(
            "{} of {} postings visible under {} filter(s)",
            self.visible.len(),
            self.catalog.len(),
            self.filters.len()
        );
    }

    /// Postings matching every active filter, in catalog order
    pub fn visible_records(&self) -> impl Iterator<Item = &Posting> + '_ {
        self.visible.iter().map(|&i| &self.catalog[i])
    }

    /// Number of visible postings
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Active filters, oldest first (new tags are appended, not prepended)
    pub fn active_filters(&self) -> impl Iterator<Item = &str> + '_ {
        self.filters.iter().map(String::as_str)
    }

    /// Whether `tag` is an active filter
    #[must_use]
    pub fn is_active(&self, tag: &str) -> bool {
        self.filters.contains(tag)
    }

    /// Whether any filter is active (drives the filter bar)
    #[must_use]
    pub fn is_filtering(&self) -> bool {
        !self.filters.is_empty()
    }

    /// The full catalog
    #[must_use]
    pub fn catalog(&self) -> &[Posting] {
        &self.catalog
    }

    /// Distinct tags across the catalog, in first-seen order
    #[must_use]
    pub fn all_tags(&self) -> Vec<&str> {
        let tags: IndexSet<&str> = self.catalog.iter().flat_map(Posting::tags).collect();
        tags.into_iter().collect()
    }

    /// Owned snapshot of the current state
    #[must_use]
    pub fn snapshot(&self) -> FilterSnapshot {
        FilterSnapshot {
            active_filters: self.filters.iter().cloned().collect(),
            visible: self.visible_records().cloned().collect(),
        }
    }
}

/// Indices of postings whose tags are a superset of `filters`
#[must_use]
pub fn matching_indices(catalog: &[Posting], filters: &IndexSet<String>) -> Vec<usize> {
    catalog
        .iter()
        .enumerate()
        .filter(|(_, posting)| filters.iter().all(|f| posting.has_tag(f)))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_posting(id: u32, role: &str, level: &str, languages: &[&str], tools: &[&str]) -> Posting {
        Posting {
            id,
            company: format!("company-{id}"),
            logo: String::new(),
            new: false,
            featured: false,
            position: "Developer".into(),
            role: role.into(),
            level: level.into(),
            posted_at: "1d ago".into(),
            contract: "Full Time".into(),
            location: "Remote".into(),
            languages: languages.iter().map(|s| (*s).to_string()).collect(),
            tools: tools.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    fn make_test_store() -> FilterStore {
        FilterStore::new(vec![
            make_test_posting(1, "Frontend", "Senior", &["HTML", "CSS"], &[]),
            make_test_posting(2, "Backend", "Junior", &["Ruby"], &["RoR"]),
            make_test_posting(3, "Frontend", "Junior", &["JavaScript"], &["React"]),
            make_test_posting(4, "Fullstack", "Junior", &["JavaScript", "Python"], &["React"]),
        ])
    }

    fn visible_ids(store: &FilterStore) -> Vec<u32> {
        store.visible_records().map(|p| p.id).collect()
    }

    #[test]
    fn test_no_filters_shows_everything() {
        let store = make_test_store();
        assert_eq!(visible_ids(&store), vec![1, 2, 3, 4]);
        assert!(!store.is_filtering());
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let mut store = make_test_store();

        store.add_filter("Junior");
        assert_eq!(visible_ids(&store), vec![2, 3, 4]);

        store.add_filter("React");
        assert_eq!(visible_ids(&store), vec![3, 4]);

        store.add_filter("Python");
        assert_eq!(visible_ids(&store), vec![4]);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut store = make_test_store();
        store.add_filter("Frontend");
        store.add_filter("Frontend");

        assert_eq!(store.active_filters().collect::<Vec<_>>(), vec!["Frontend"]);
        assert_eq!(visible_ids(&store), vec![1, 3]);
    }

    #[test]
    fn test_remove_keeps_order_of_the_rest() {
        let mut store = make_test_store();
        store.add_filter("Junior");
        store.add_filter("React");
        store.add_filter("JavaScript");
        store.remove_filter("React");

        assert_eq!(store.active_filters().collect::<Vec<_>>(), vec!["Junior", "JavaScript"]);
        assert_eq!(visible_ids(&store), vec![3, 4]);
    }

    #[test]
    fn test_new_filters_are_appended() {
        let mut store = make_test_store();
        store.add_filter("Junior");
        store.add_filter("React");
        store.add_filter("Junior");

        assert_eq!(store.active_filters().collect::<Vec<_>>(), vec!["Junior", "React"]);
        assert_eq!(store.snapshot().active_filters, vec!["Junior".to_string(), "React".to_string()]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = make_test_store();
        store.add_filter("Ruby");
        store.remove_filter("Elm");

        assert_eq!(visible_ids(&store), vec![2]);
        assert!(store.is_active("Ruby"));
    }

    #[test]
    fn test_clear_restores_catalog() {
        let mut store = make_test_store();
        store.apply(FilterEvent::Add("Backend".into()));
        store.apply(FilterEvent::Add("Frontend".into()));
        assert_eq!(store.visible_count(), 0);

        store.apply(FilterEvent::Clear);
        assert_eq!(visible_ids(&store), vec![1, 2, 3, 4]);
        assert!(!store.is_filtering());
    }

    #[test]
    fn test_unknown_tag_hides_everything() {
        let mut store = make_test_store();
        store.add_filter("Haskell");
        assert_eq!(store.visible_count(), 0);
    }

    #[test]
    fn test_all_tags_first_seen_order() {
        let store = make_test_store();
        let tags = store.all_tags();
        assert_eq!(&tags[..4], &["Frontend", "Senior", "HTML", "CSS"]);
        assert_eq!(tags.iter().filter(|t| **t == "Junior").count(), 1);
    }

    #[test]
    fn test_snapshot() {
        let mut store = make_test_store();
        store.add_filter("Fullstack");
        let snap = store.snapshot();

        assert_eq!(snap.active_filters, vec!["Fullstack".to_string()]);
        assert_eq!(snap.visible.len(), 1);
        assert_eq!(snap.visible[0].id, 4);
    }
}
