// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Option normalization
//!
//! Fills unset fields with defaults and raises below-minimum values to their
//! floor. Never fails and never reports back to the caller; adjustments are
//! only visible in trace/debug logs.

use crate::limits::{
    DEFAULT_LOCK_TTL, DEFAULT_MODE, DEFAULT_READER_LOCK_TOKEN, DEFAULT_RETRY_COUNT,
    DEFAULT_RETRY_INTERVAL, MIN_LOCK_TTL, MIN_RETRY_COUNT, MIN_RETRY_INTERVAL,
};
use crate::mode::Mode;
use crate::options::Options;

/// Apply defaults and floors to `options` in place.
///
/// Rules run in field order and do not look at each other. The result
/// satisfies every rule, so normalizing twice is the same as once.
///
/// Callers must not normalize the same value from several threads at once;
/// normalize once before handing the options to a lock client.
pub fn normalize(options: &mut Options) {
    if options.lock_ttl.is_zero() {
        tracing::trace!(field = "lock_ttl", applied = ?DEFAULT_LOCK_TTL, "default applied");
        options.lock_ttl = DEFAULT_LOCK_TTL;
    } else if options.lock_ttl < MIN_LOCK_TTL {
        tracing::debug!(
            field = "lock_ttl",
            requested = ?options.lock_ttl,
            applied = ?MIN_LOCK_TTL,
            "raised to minimum"
        );
        options.lock_ttl = MIN_LOCK_TTL;
    }

    if options.retry_count == 0 {
        tracing::trace!(field = "retry_count", applied = DEFAULT_RETRY_COUNT, "default applied");
        options.retry_count = DEFAULT_RETRY_COUNT;
    }
    // Separate check: negative counts are below the floor, not unset.
    if options.retry_count < MIN_RETRY_COUNT {
        tracing::debug!(
            field = "retry_count",
            requested = options.retry_count,
            applied = MIN_RETRY_COUNT,
            "raised to minimum"
        );
        options.retry_count = MIN_RETRY_COUNT;
    }

    if options.retry_interval.is_zero() {
        tracing::trace!(
            field = "retry_interval",
            applied = ?DEFAULT_RETRY_INTERVAL,
            "default applied"
        );
        options.retry_interval = DEFAULT_RETRY_INTERVAL;
    }
    if options.retry_interval < MIN_RETRY_INTERVAL {
        tracing::debug!(
            field = "retry_interval",
            requested = ?options.retry_interval,
            applied = ?MIN_RETRY_INTERVAL,
            "raised to minimum"
        );
        options.retry_interval = MIN_RETRY_INTERVAL;
    }

    if options.reader_lock_token.is_empty() {
        tracing::trace!(field = "reader_lock_token", "default applied");
        options.reader_lock_token = DEFAULT_READER_LOCK_TOKEN.to_string();
    }

    if options.mode == Mode::Undefined {
        tracing::trace!(field = "mode", applied = %DEFAULT_MODE, "default applied");
        options.mode = DEFAULT_MODE;
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
