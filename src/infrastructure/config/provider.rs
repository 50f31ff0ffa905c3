use std::ffi::OsString;

use figment::value::{Dict, Map, Value};
use figment::{Error, Metadata, Profile, Provider};

use crate::domain::ports::EnvSource;

/// Figment provider over an [`EnvSource`] snapshot.
///
/// Each binding is looked up by exact, case-sensitive name. Two spellings are
/// tried in order and the first one present wins:
/// 1. `<PREFIX>_<NAME>`, e.g. `NVIDIAGPU__NVIDIAGPU_INSTANCE_TYPE`
/// 2. `<NAME>`, e.g. `NVIDIAGPU_INSTANCE_TYPE`
///
/// Every other variable is ignored. Bound values are emitted as strings, so
/// `"8"` stays `"8"` instead of being reinterpreted as a number.
///
/// `data()` fails when the chosen variable holds non-Unicode bytes.
#[derive(Debug, Clone)]
pub struct PrefixedEnv {
    prefix: String,
    bindings: &'static [(&'static str, &'static str)],
    vars: Vec<(OsString, OsString)>,
}

impl PrefixedEnv {
    /// Snapshot `source` now; later changes to the source are not seen.
    pub fn new(
        source: &dyn EnvSource,
        prefix: impl Into<String>,
        bindings: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            prefix: prefix.into().to_ascii_uppercase(),
            bindings,
            vars: source.vars(),
        }
    }

    fn lookup(&self, name: &str) -> Option<&OsString> {
        self.vars
            .iter()
            .find(|(key, _)| key.as_os_str() == name)
            .map(|(_, value)| value)
    }

    fn collect(&self) -> Result<Dict, Error> {
        let mut dict = Dict::new();

        for (name, field) in self.bindings {
            let prefixed = format!("{}_{name}", self.prefix);
            let found = self
                .lookup(&prefixed)
                .map(|value| (prefixed.as_str(), value))
                .or_else(|| self.lookup(name).map(|value| (*name, value)));

            let Some((source, value)) = found else {
                continue;
            };
            let value = value.to_str().ok_or_else(|| {
                Error::from(format!(
                    "environment variable `{source}` for field `{field}` is not valid unicode"
                ))
            })?;
            dict.insert((*field).to_string(), Value::from(value.to_string()));
        }

        Ok(dict)
    }
}

impl Provider for PrefixedEnv {
    fn metadata(&self) -> Metadata {
        Metadata::named(format!("`{}` environment variable(s)", self.prefix))
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        Ok(Profile::Default.collect(self.collect()?))
    }
}
