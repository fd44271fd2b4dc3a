// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Writer lock token generation
//!
//! A writer token is the configured app id followed by a unique suffix, so a
//! token found in the backing store can be traced back to the application
//! that wrote it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Produces the unique part of a writer token
pub trait TokenGen: Clone + Send + Sync {
    fn next_suffix(&self) -> String;
}

/// UUID v4 suffixes for production use
#[derive(Clone, Debug, Default)]
pub struct UuidTokenGen;

impl TokenGen for UuidTokenGen {
    fn next_suffix(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Counter-based suffixes for tests that need predictable tokens
#[derive(Clone, Debug, Default)]
pub struct SequentialTokenGen {
    counter: Arc<AtomicU64>,
}

impl SequentialTokenGen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenGen for SequentialTokenGen {
    fn next_suffix(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        n.to_string()
    }
}

/// Build a writer token from an app id prefix and a fresh suffix.
///
/// An empty app id yields the bare suffix.
pub fn writer_token(app_id: &str, token_gen: &impl TokenGen) -> String {
    let suffix = token_gen.next_suffix();
    if app_id.is_empty() {
        suffix
    } else {
        format!("{}_{}", app_id, suffix)
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
