//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - `TracingSink`, `RecordingSink`, `NullSink` diagnostic adapters
//! - Subscriber setup for test harnesses (`LoggerImpl`)

pub mod config;
pub mod logger;
pub mod sink;

pub use config::{LogConfig, LogFormat};
pub use logger::LoggerImpl;
pub use sink::{NullSink, RecordingSink, TracingSink, LOG_TARGET};
