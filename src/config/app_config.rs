//! Application-level settings parsing from environment variables.
//!
//! Loading this group has a filesystem side effect: the parent directory
//! of the backup file is created eagerly so the persistence collaborator
//! can assume it exists.

use super::parse;
use crate::errors::ConfigError;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Application environment configuration
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    pub log_level: String,
    pub enable_trading: bool,
    pub mock_mode: bool,
    pub backup_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            log_level: parse::string_or("LOG_LEVEL", "INFO"),
            enable_trading: parse::flag_or("ENABLE_TRADING", false),
            mock_mode: parse::flag_or("MOCK_MODE", true),
            backup_file: PathBuf::from(parse::string_or(
                "BACKUP_FILE",
                "./backup/risk_params_backup.json",
            )),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.mock_mode && !self.enable_trading {
            warn!("MOCK_MODE and ENABLE_TRADING are both off - system will only analyze");
        }

        if let Some(dir) = self.backup_file.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(|source| ConfigError::BackupDir {
                    path: dir.to_path_buf(),
                    source,
                })?;
            }
        }

        Ok(())
    }
}
