//! nvidiagpu-config - environment configuration for NVIDIA GPU tests
//!
//! Binds `NVIDIAGPU_INSTANCE_TYPE` and `NVIDIAGPU_CATALOGSOURCE` into a typed
//! [`NvidiaGpuConfig`]. Unset variables become empty strings; a binding
//! failure is logged and reported as an absent config.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the config model, load outcome, and ports
//! - **Infrastructure Layer** (`infrastructure`): figment binding, environment
//!   sources, logging adapters
//!
//! # Example
//!
//! ```
//! use nvidiagpu_config::{ConfigLoader, LoadOutcome, MapEnv, RecordingSink};
//!
//! let env = MapEnv::new().with("NVIDIAGPU_INSTANCE_TYPE", "p3.8xlarge");
//! let sink = RecordingSink::new();
//!
//! match ConfigLoader::load_from(&env, &sink) {
//!     LoadOutcome::Loaded(config) => {
//!         assert_eq!(config.instance_type, "p3.8xlarge");
//!         assert_eq!(config.catalog_source, "");
//!     }
//!     LoadOutcome::Unavailable { reason } => panic!("{reason}"),
//! }
//! ```

pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{LoadOutcome, NvidiaGpuConfig};
pub use domain::ports::{DiagnosticSink, EnvSource, Severity};
pub use infrastructure::config::{ConfigError, ConfigLoader, PrefixedEnv};
pub use infrastructure::env::{MapEnv, ProcessEnv};
pub use infrastructure::logging::{
    LogConfig, LogFormat, LoggerImpl, NullSink, RecordingSink, TracingSink,
};
