//! Shared imports and helpers for specs.

#![allow(unused_imports)]

pub use rwlock_core::limits::*;
pub use rwlock_core::{normalize, Advisory, ConfigError, Mode, Options};
pub use std::time::Duration;

/// The options a caller gets when every field is left unset
pub fn default_options(app_id: &str) -> Options {
    Options {
        lock_ttl: Duration::from_secs(1),
        retry_count: 200,
        retry_interval: Duration::from_millis(10),
        app_id: app_id.to_string(),
        reader_lock_token: "read_c2d-75a1-4b5b-a6fb-b0754224c666".to_string(),
        mode: Mode::PreferWriter,
    }
}

/// Write `contents` to `name` inside a fresh temp directory
pub fn write_config(name: &str, contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}
