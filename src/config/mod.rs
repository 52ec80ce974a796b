//! Configuration module for sentirisk.
//!
//! This module provides structured configuration loading from environment
//! variables, organized by domain: Firebase, external APIs, trading,
//! sentiment thresholds, and application settings.

mod api_config;
mod app_config;
mod firebase_config;
mod parse;
mod sentiment_config;
mod trading_config;

pub use api_config::{ApiAvailability, ApiConfig};
pub use app_config::AppConfig;
pub use firebase_config::FirebaseConfig;
pub use sentiment_config::SentimentConfig;
pub use trading_config::TradingConfig;

use crate::errors::ConfigError;

/// Complete application configuration.
///
/// Built once by the startup sequence and passed by value to every
/// collaborator that needs it; nothing reads the process environment
/// after `load` returns.
#[derive(Debug, Clone)]
pub struct Settings {
    pub firebase: FirebaseConfig,
    pub api: ApiConfig,
    pub trading: TradingConfig,
    pub sentiment: SentimentConfig,
    pub app: AppConfig,
}

impl Settings {
    /// Load configuration from the process environment.
    ///
    /// An optional `.env` file in the working directory is applied first;
    /// it never overrides variables already set in the process. Loading
    /// either yields a fully populated `Settings` or fails as a whole -
    /// a numeric variable that is present but unparseable, or a backup
    /// directory that cannot be created, aborts startup.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Ok(Self {
            firebase: FirebaseConfig::from_env(),
            api: ApiConfig::from_env(),
            trading: TradingConfig::from_env()?,
            sentiment: SentimentConfig::default(),
            app: AppConfig::from_env()?,
        })
    }
}
