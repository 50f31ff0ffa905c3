//! Domain layer
//!
//! Pure data types and the port traits the loader talks through:
//! - `NvidiaGpuConfig`: the bound configuration
//! - `LoadOutcome`: loaded value or the reason it is unavailable
//! - `EnvSource` / `DiagnosticSink`: injectable environment and log output

pub mod models;
pub mod ports;
