//! Environment source adapters
//!
//! - `ProcessEnv` reads the real process environment
//! - `MapEnv` holds an explicit mapping, for tests and embedding

use std::collections::BTreeMap;
use std::ffi::OsString;

use crate::domain::ports::EnvSource;

/// Reads `std::env::vars_os` at call time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn vars(&self) -> Vec<(OsString, OsString)> {
        std::env::vars_os().collect()
    }
}

/// In-memory environment.
///
/// Keys are kept as given, so two names that differ only by case are two
/// distinct entries, the same as on a real Unix environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: BTreeMap<OsString, OsString>,
}

impl MapEnv {
    /// Empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert; replaces an existing value.
    #[must_use]
    pub fn with(mut self, name: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<OsString>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn vars(&self) -> Vec<(OsString, OsString)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_env_with_replaces() {
        let env = MapEnv::new().with("A", "1").with("B", "2").with("A", "3");
        assert_eq!(
            env.vars(),
            vec![
                (OsString::from("A"), OsString::from("3")),
                (OsString::from("B"), OsString::from("2")),
            ]
        );
    }

    #[test]
    fn test_map_env_from_iter_matches_builder() {
        let collected: MapEnv = [("X", "1"), ("Y", "2")].into_iter().collect();
        assert_eq!(collected, MapEnv::new().with("Y", "2").with("X", "1"));
    }

    #[test]
    fn test_process_env_sees_set_variable() {
        temp_env::with_var("NVIDIAGPU_CONFIG_PROCESS_ENV_PROBE", Some("probe"), || {
            let found = ProcessEnv.vars().into_iter().any(|(k, v)| {
                k == "NVIDIAGPU_CONFIG_PROCESS_ENV_PROBE" && v == "probe"
            });
            assert!(found);
        });
    }
}
