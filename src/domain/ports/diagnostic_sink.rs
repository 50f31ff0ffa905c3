/// Severity attached to a diagnostic line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Normal progress notices
    Info,
    /// Failure detail
    Error,
}

/// Port for diagnostic output following hexagonal architecture
///
/// The loader writes at most two lines per call: a start notice and, on
/// failure only, the failure detail. Production code routes these to
/// `tracing`; tests swap in a recording sink and assert on the lines.
pub trait DiagnosticSink: Send + Sync {
    /// Record one line of output.
    fn record(&self, severity: Severity, line: &str);
}
