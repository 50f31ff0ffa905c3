use super::NvidiaGpuConfig;

/// Result of a single load attempt.
///
/// `Unavailable` carries the binding failure detail. Callers that only care
/// whether a config exists can collapse it with [`LoadOutcome::into_option`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The environment was bound successfully
    Loaded(NvidiaGpuConfig),
    /// Binding failed; no partial config is exposed
    Unavailable {
        /// Human-readable failure detail
        reason: String,
    },
}

impl LoadOutcome {
    /// Returns `true` for [`LoadOutcome::Loaded`].
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// The loaded config, if any.
    pub const fn config(&self) -> Option<&NvidiaGpuConfig> {
        match self {
            Self::Loaded(config) => Some(config),
            Self::Unavailable { .. } => None,
        }
    }

    /// Failure detail when unavailable.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Loaded(_) => None,
            Self::Unavailable { reason } => Some(reason),
        }
    }

    /// Drop the failure detail and keep only presence.
    pub fn into_option(self) -> Option<NvidiaGpuConfig> {
        match self {
            Self::Loaded(config) => Some(config),
            Self::Unavailable { .. } => None,
        }
    }
}
