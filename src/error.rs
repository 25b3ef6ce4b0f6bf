// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Errors for the fallible edges: catalog loading and configuration.
//!
//! Screen state itself never fails; bad input becomes zero or a status.

use std::path::PathBuf;
use thiserror::Error;

/// Library error type
#[derive(Debug, Error)]
pub enum Error {
    /// Catalog file could not be read
    #[error("failed to read catalog {}: {source}", .path.display())]
    ReadCatalog {
        /// Path that was read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON was malformed
    #[error("failed to parse catalog: {0}")]
    ParseCatalog(#[from] serde_json::Error),

    /// Two postings share an id
    #[error("duplicate posting id {0} in catalog")]
    DuplicatePosting(u32),

    /// Configuration could not be assembled
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result alias using the library error
pub type Result<T> = std::result::Result<T, Error>;
