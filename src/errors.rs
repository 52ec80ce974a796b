use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building the application configuration.
///
/// Anything not covered here is a valid configuration: missing optional
/// credentials and an empty Firebase database URL are expected states,
/// not errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} is not a valid {expected}")]
    Parse {
        key: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("failed to create backup directory {}", .path.display())]
    BackupDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
