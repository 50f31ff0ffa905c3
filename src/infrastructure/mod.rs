//! Infrastructure layer module
//!
//! Adapters behind the domain ports plus the binding machinery:
//! - Configuration loading (figment)
//! - Environment sources (process, in-memory)
//! - Logging (tracing sinks and subscriber setup)

pub mod config;
pub mod env;
pub mod logging;
