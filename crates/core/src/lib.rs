//! rwlock-core: Options for the distributed reader-writer lock client
//!
//! This crate provides:
//! - `Options`, the tuning parameters a lock client is constructed with
//! - `normalize`, which applies defaults and minimum bounds in place
//! - TOML loading with human-readable durations
//! - Advisories for configurations that load but look wrong
//! - Writer token generation

pub mod limits;
pub mod mode;
pub mod token;

pub mod advisory;
pub mod config;
pub mod normalize;
pub mod options;

// Re-exports
pub use advisory::Advisory;
pub use config::ConfigError;
pub use mode::Mode;
pub use normalize::normalize;
pub use options::Options;
pub use token::{SequentialTokenGen, TokenGen, UuidTokenGen};
