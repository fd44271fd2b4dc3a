// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Default values and lower bounds for lock options.
//!
//! A zero-valued field takes its default; a non-zero value below its floor
//! is raised to the floor. See [`crate::normalize`].

use crate::mode::Mode;
use std::time::Duration;

/// Smallest lock TTL honored by the lock client.
pub const MIN_LOCK_TTL: Duration = Duration::from_millis(100);

/// Lock TTL used when none is configured.
pub const DEFAULT_LOCK_TTL: Duration = Duration::from_secs(1);

/// Smallest number of acquisition attempts.
pub const MIN_RETRY_COUNT: i64 = 1;

/// Number of acquisition attempts used when none is configured.
pub const DEFAULT_RETRY_COUNT: i64 = 200;

/// Smallest spacing between acquisition attempts.
pub const MIN_RETRY_INTERVAL: Duration = Duration::from_millis(1);

/// Spacing between acquisition attempts used when none is configured.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_millis(10);

/// Token shared by every reader that does not name its own reader group.
pub const DEFAULT_READER_LOCK_TOKEN: &str = "read_c2d-75a1-4b5b-a6fb-b0754224c666";

/// Writer-preferring, kept as the default so existing callers keep their fairness.
pub const DEFAULT_MODE: Mode = Mode::PreferWriter;
