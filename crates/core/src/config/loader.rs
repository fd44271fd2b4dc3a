// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TOML loading for lock options.
//!
//! Every key is optional and durations are human readable:
//!
//! ```toml
//! lock_ttl = "2s"
//! retry_count = 50
//! retry_interval = "20ms"
//! app_id = "billing"
//! mode = "prefer_reader"
//! ```
//!
//! The same keys may sit under an `[rwlock]` table when the options share a
//! file with other application settings. Loaded options are always
//! normalized.

use crate::options::Options;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Table name accepted as a wrapper around the option keys
pub const SECTION: &str = "rwlock";

/// A document whose options live under the `[rwlock]` table.
///
/// Sibling tables belong to the rest of the application and are skipped.
#[derive(Deserialize)]
struct Sectioned {
    rwlock: Options,
}

/// Errors that can occur while loading or rendering options.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the config file
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed TOML, unknown key, or bad value
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Top-level keys next to an `[rwlock]` table
    #[error("Keys outside [rwlock] would be ignored: {}", .keys.join(", "))]
    KeysOutsideSection { keys: Vec<String> },

    /// Options could not be rendered as TOML
    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Options {
    /// Parse options from TOML text and normalize them.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = toml::from_str(text)?;

        // Deserialize from the text itself so errors keep their location.
        let options = match table.get(SECTION) {
            Some(toml::Value::Table(_)) => {
                let keys: Vec<String> = table
                    .iter()
                    .filter(|(_, value)| !is_sibling_table(value))
                    .map(|(key, _)| key.clone())
                    .collect();
                if !keys.is_empty() {
                    return Err(ConfigError::KeysOutsideSection { keys });
                }
                toml::from_str::<Sectioned>(text)?.rwlock
            }
            _ => toml::from_str::<Options>(text)?,
        };
        let options = options.normalized();

        for advisory in options.advisories() {
            tracing::warn!(%advisory, "lock options");
        }

        Ok(options)
    }

    /// Read options from a TOML file and normalize them.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let options = Self::from_toml_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            lock_ttl = ?options.lock_ttl,
            retry_count = options.retry_count,
            retry_interval = ?options.retry_interval,
            mode = %options.mode,
            "lock options loaded"
        );
        Ok(options)
    }

    /// Render the options as TOML with human-readable durations.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

/// `[table]` or `[[array]]` belonging to another part of the application
fn is_sibling_table(value: &toml::Value) -> bool {
    match value {
        toml::Value::Table(_) => true,
        toml::Value::Array(items) => !items.is_empty() && items.iter().all(toml::Value::is_table),
        _ => false,
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
