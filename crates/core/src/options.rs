// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lock session options
//!
//! Every field may be left at its zero value; [`crate::normalize`] fills in
//! defaults and raises out-of-range values to their floor before the options
//! are handed to a lock client.

use crate::mode::Mode;
use crate::token::{self, TokenGen, UuidTokenGen};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunable parameters for a reader-writer lock session
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// How long a lock is honored before it expires, so a crashed holder
    /// cannot keep it forever. Should stay below the retry budget.
    #[serde(with = "humantime_serde")]
    pub lock_ttl: Duration,
    /// Maximum number of acquisition attempts
    pub retry_count: i64,
    /// Spacing between acquisition attempts
    #[serde(with = "humantime_serde")]
    pub retry_interval: Duration,
    /// Writer token prefix, for debugging only
    pub app_id: String,
    /// Shared by a reader group. Set it to split readers into subgroups.
    pub reader_lock_token: String,
    /// Reader/writer priority policy
    pub mode: Mode,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lock_ttl(mut self, ttl: Duration) -> Self {
        self.lock_ttl = ttl;
        self
    }

    pub fn with_retry_count(mut self, count: i64) -> Self {
        self.retry_count = count;
        self
    }

    pub fn with_retry_interval(mut self, interval: Duration) -> Self {
        self.retry_interval = interval;
        self
    }

    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = app_id.into();
        self
    }

    pub fn with_reader_lock_token(mut self, token: impl Into<String>) -> Self {
        self.reader_lock_token = token.into();
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Normalize and return the options
    pub fn normalized(mut self) -> Self {
        crate::normalize::normalize(&mut self);
        self
    }

    /// Total time spent waiting between attempts before acquisition gives up
    ///
    /// Zero when the retry count is not positive.
    pub fn retry_budget(&self) -> Duration {
        if self.retry_count <= 0 {
            return Duration::ZERO;
        }
        let attempts = u32::try_from(self.retry_count).unwrap_or(u32::MAX);
        self.retry_interval.saturating_mul(attempts)
    }

    /// A fresh writer token prefixed with the app id
    pub fn writer_token(&self) -> String {
        self.writer_token_with(&UuidTokenGen)
    }

    pub fn writer_token_with(&self, token_gen: &impl TokenGen) -> String {
        token::writer_token(&self.app_id, token_gen)
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
