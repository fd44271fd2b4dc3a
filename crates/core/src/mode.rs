// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reader/writer priority policy

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority policy between concurrent readers and writers.
///
/// Read by the lock-acquisition protocol to decide queuing; it carries no
/// logic of its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Not an operating value. Replaced by the default during normalization.
    #[default]
    Undefined,
    /// Readers and writers have equal priority
    PreferReader,
    /// Writers take precedence over readers
    PreferWriter,
}

impl Mode {
    /// Whether this is an operating value (anything but `Undefined`)
    pub fn is_defined(self) -> bool {
        !matches!(self, Mode::Undefined)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Undefined => "undefined",
            Mode::PreferReader => "prefer_reader",
            Mode::PreferWriter => "prefer_writer",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
