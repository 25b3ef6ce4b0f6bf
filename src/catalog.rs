// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Postings catalog loading

use crate::error::{Error, Result};
use crate::types::Posting;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

const BUNDLED_POSTINGS: &str = include_str!("../data/postings.json");

/// Parse a JSON array of postings, rejecting duplicate ids
pub fn parse_postings(json: &str) -> Result<Vec<Posting>> {
    let postings: Vec<Posting> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(postings.len());
    if let Some(dup) = postings.iter().find(|p| !seen.insert(p.id)) {
        return Err(Error::DuplicatePosting(dup.id));
    }

    Ok(postings)
}

/// Load postings from a JSON file
pub fn load_postings(path: &Path) -> Result<Vec<Posting>> {
    let content = fs::read_to_string(path).map_err(|source| Error::ReadCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    let postings = parse_postings(&content)?;
    debug!("Loaded {} postings from {}", postings.len(), path.display());
    Ok(postings)
}

/// The mock catalog compiled into the crate
pub fn bundled_postings() -> Result<Vec<Posting>> {
    parse_postings(BUNDLED_POSTINGS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_catalog_parses() {
        let postings = bundled_postings().unwrap();
        assert_eq!(postings.len(), 10);
        assert_eq!(postings[0].company, "Photosnap");
        assert_eq!(postings[0].posted_at, "1d ago");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id": 1, "company": "A", "position": "Dev", "role": "Frontend", "level": "Junior"},
            {"id": 1, "company": "B", "position": "Dev", "role": "Backend", "level": "Senior"}
        ]"#;
        assert!(matches!(parse_postings(json), Err(Error::DuplicatePosting(1))));
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"[{"id": 3, "company": "A", "position": "Dev", "role": "Frontend", "level": "Junior"}]"#;
        let postings = parse_postings(json).unwrap();
        assert!(postings[0].languages.is_empty());
        assert!(!postings[0].featured);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{BUNDLED_POSTINGS}").unwrap();

        let postings = load_postings(file.path()).unwrap();
        assert_eq!(postings.len(), 10);
    }

    #[test]
    fn test_missing_file() {
        let err = load_postings(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, Error::ReadCatalog { .. }));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_postings("{not json"), Err(Error::ParseCatalog(_))));
    }
}
