//! Configuration management infrastructure
//!
//! Environment binding using figment:
//! - Programmatic defaults (empty strings)
//! - `NVIDIAGPU_*` variables from an injectable source
//! - Failure reported as a log line plus an absent result

pub mod loader;
pub mod provider;

pub use loader::{ConfigError, ConfigLoader};
pub use provider::PrefixedEnv;
