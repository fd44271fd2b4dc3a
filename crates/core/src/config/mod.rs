// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration file support

mod loader;

pub use loader::{ConfigError, SECTION};
