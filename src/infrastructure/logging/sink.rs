use std::sync::{Mutex, PoisonError};

use crate::domain::ports::{DiagnosticSink, Severity};

/// `tracing` target used for loader diagnostics.
pub const LOG_TARGET: &str = "nvidiagpu_config";

/// Forwards diagnostics to the global `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, severity: Severity, line: &str) {
        match severity {
            Severity::Info => tracing::info!(target: LOG_TARGET, "{line}"),
            Severity::Error => tracing::error!(target: LOG_TARGET, "{line}"),
        }
    }
}

/// Keeps every recorded line in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<(Severity, String)>>,
}

impl RecordingSink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines in recording order.
    pub fn lines(&self) -> Vec<String> {
        self.entries().into_iter().map(|(_, line)| line).collect()
    }

    /// Lines recorded at exactly `severity`.
    pub fn lines_at(&self, severity: Severity) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, line)| line)
            .collect()
    }

    /// Lines together with their severity.
    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, severity: Severity, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((severity, line.to_string()));
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&self, _severity: Severity, _line: &str) {}
}
