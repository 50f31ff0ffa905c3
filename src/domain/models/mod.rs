pub mod load_outcome;
pub mod nvidiagpu_config;

pub use load_outcome::LoadOutcome;
pub use nvidiagpu_config::NvidiaGpuConfig;
