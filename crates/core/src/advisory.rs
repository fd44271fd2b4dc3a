// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Non-fatal notes about a lock configuration
//!
//! Normalization clamps instead of rejecting, so a suspicious configuration
//! still loads. Advisories describe what looks wrong without changing it.

use crate::options::Options;
use std::fmt;
use std::time::Duration;

/// Something about a configuration worth a warning
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advisory {
    /// The lock outlives the whole acquisition loop, so a contender can run
    /// out of attempts while a stale lock is still honored.
    TtlExceedsRetryBudget {
        lock_ttl: Duration,
        retry_budget: Duration,
    },
    /// Mode was never resolved; the options have not been normalized
    UndefinedMode,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::TtlExceedsRetryBudget {
                lock_ttl,
                retry_budget,
            } => write!(
                f,
                "lock_ttl {} is not below the retry budget {} (retry_count x retry_interval)",
                humantime::format_duration(*lock_ttl),
                humantime::format_duration(*retry_budget)
            ),
            Advisory::UndefinedMode => write!(f, "mode is undefined; options were not normalized"),
        }
    }
}

impl Options {
    /// Collect advisories for these options
    pub fn advisories(&self) -> Vec<Advisory> {
        let mut advisories = Vec::new();

        let retry_budget = self.retry_budget();
        if self.lock_ttl >= retry_budget {
            advisories.push(Advisory::TtlExceedsRetryBudget {
                lock_ttl: self.lock_ttl,
                retry_budget,
            });
        }

        if !self.mode.is_defined() {
            advisories.push(Advisory::UndefinedMode);
        }

        advisories
    }
}

#[cfg(test)]
#[path = "advisory_tests.rs"]
mod tests;
