use std::ffi::OsString;

/// Port for reading environment variables
///
/// Yields raw name/value pairs. Values are not assumed to be valid Unicode;
/// deciding what to do with a non-Unicode value is the binder's job.
///
/// # Examples
///
/// ```
/// use nvidiagpu_config::domain::ports::EnvSource;
/// use nvidiagpu_config::infrastructure::env::MapEnv;
///
/// let env = MapEnv::new().with("NVIDIAGPU_INSTANCE_TYPE", "p3.8xlarge");
/// assert_eq!(env.vars().len(), 1);
/// ```
pub trait EnvSource: Send + Sync {
    /// Snapshot of every variable visible to this source.
    fn vars(&self) -> Vec<(OsString, OsString)>;
}
