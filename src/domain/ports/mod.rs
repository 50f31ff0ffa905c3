//! Port trait definitions (Hexagonal Architecture)
//!
//! - `EnvSource`: where environment variables come from
//! - `DiagnosticSink`: where the loader writes its log lines
//!
//! Adapters live in `infrastructure::env` and `infrastructure::logging`.

pub mod diagnostic_sink;
pub mod env_source;

pub use diagnostic_sink::{DiagnosticSink, Severity};
pub use env_source::EnvSource;
