use figment::Figment;
use figment::providers::Serialized;
use thiserror::Error;

use super::provider::PrefixedEnv;
use crate::domain::models::{LoadOutcome, NvidiaGpuConfig};
use crate::domain::ports::{DiagnosticSink, EnvSource, Severity};
use crate::infrastructure::env::ProcessEnv;
use crate::infrastructure::logging::TracingSink;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The environment could not be bound onto [`NvidiaGpuConfig`]
    #[error("{0}")]
    EnvironmentBinding(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::EnvironmentBinding(Box::new(err))
    }
}

/// Loads [`NvidiaGpuConfig`] from `NVIDIAGPU_*` environment variables
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from the process environment, logging through `tracing`.
    ///
    /// Returns `None` when binding fails; the failure detail goes to the log
    /// only. Use [`ConfigLoader::load_from`] to keep the reason.
    pub fn load() -> Option<NvidiaGpuConfig> {
        Self::load_from(&ProcessEnv, &TracingSink).into_option()
    }

    /// Load from an explicit environment, writing diagnostics to `sink`.
    ///
    /// Emits one start notice, plus one error line if binding fails. A
    /// failed load never exposes a partially bound config.
    pub fn load_from(env: &dyn EnvSource, sink: &dyn DiagnosticSink) -> LoadOutcome {
        sink.record(Severity::Info, "Creating new NvidiaGPUConfig");

        match Self::try_load_from(env) {
            Ok(config) => LoadOutcome::Loaded(config),
            Err(err) => {
                let reason = err.to_string();
                sink.record(
                    Severity::Error,
                    &format!("failed to instantiate nvidiaGPUConfig: {reason}"),
                );
                LoadOutcome::Unavailable { reason }
            }
        }
    }

    /// Bind without logging and return the typed error on failure.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (empty strings)
    /// 2. `NVIDIAGPU_*` variables from `env`
    pub fn try_load_from(env: &dyn EnvSource) -> Result<NvidiaGpuConfig, ConfigError> {
        let config: NvidiaGpuConfig = Figment::new()
            .merge(Serialized::defaults(NvidiaGpuConfig::default()))
            .merge(PrefixedEnv::new(
                env,
                NvidiaGpuConfig::ENV_PREFIX,
                NvidiaGpuConfig::ENV_BINDINGS,
            ))
            .extract()?;
        Ok(config)
    }
}
