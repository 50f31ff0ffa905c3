use serde::{Deserialize, Serialize};

/// Environment information related to nvidiagpu tests.
///
/// Both fields are opaque strings. An unset variable binds to the empty
/// string; nothing here checks that a value is meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct NvidiaGpuConfig {
    /// GPU instance type requested for the test run (`NVIDIAGPU_INSTANCE_TYPE`)
    pub instance_type: String,

    /// Catalog source the GPU operator is installed from (`NVIDIAGPU_CATALOGSOURCE`)
    pub catalog_source: String,
}

impl NvidiaGpuConfig {
    /// Namespace prefix. Also forms the higher-precedence
    /// `NVIDIAGPU__<VARIABLE>` spelling of each binding.
    pub const ENV_PREFIX: &'static str = "NVIDIAGPU_";

    /// Exact variable name to field key. Names are case-sensitive.
    pub const ENV_BINDINGS: &'static [(&'static str, &'static str)] = &[
        ("NVIDIAGPU_INSTANCE_TYPE", "instance_type"),
        ("NVIDIAGPU_CATALOGSOURCE", "catalog_source"),
    ];

    /// Build a config from explicit values.
    pub fn new(instance_type: impl Into<String>, catalog_source: impl Into<String>) -> Self {
        Self {
            instance_type: instance_type.into(),
            catalog_source: catalog_source.into(),
        }
    }
}
