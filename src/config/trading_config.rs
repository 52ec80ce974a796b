//! Trading parameter parsing from environment variables.
//!
//! Position-size bounds and the risk multiplier are fail-fast: a value
//! that is present but not numeric aborts the load so a typo in the
//! deployment environment is caught before the application starts.

use super::parse;
use crate::errors::ConfigError;
use serde::Serialize;

/// Trading environment configuration
#[derive(Debug, Clone, Serialize)]
pub struct TradingConfig {
    pub exchange: String,
    pub symbols: Vec<String>,
    pub initial_risk_multiplier: f64,
    pub max_position_size: f64,
    pub min_position_size: f64,
    pub update_interval_minutes: u64,
}

impl TradingConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let symbols = split_symbols(&parse::string_or("TRADING_SYMBOLS", "BTC/USDT,ETH/USDT"));

        Ok(Self {
            exchange: parse::string_or("TRADING_EXCHANGE", "binance"),
            symbols,
            initial_risk_multiplier: parse::float_or("INITIAL_RISK_MULTIPLIER", 1.0)?,
            max_position_size: parse::float_or("MAX_POSITION_SIZE", 10000.0)?,
            min_position_size: parse::float_or("MIN_POSITION_SIZE", 100.0)?,
            update_interval_minutes: parse::u64_or("UPDATE_INTERVAL_MINUTES", 15)?,
        })
    }
}

/// Split a comma-separated symbol list. Order is preserved, duplicates
/// are kept, and so are empty segments: `"BTC/USDT,,ETH/USDT"` yields
/// three entries. Segments are not trimmed.
fn split_symbols(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_preserves_order() {
        assert_eq!(
            split_symbols("BTC/USDT,ETH/USDT"),
            vec!["BTC/USDT".to_string(), "ETH/USDT".to_string()]
        );
    }

    #[test]
    fn test_split_keeps_empty_segments_and_duplicates() {
        assert_eq!(
            split_symbols("BTC/USDT,,BTC/USDT"),
            vec![
                "BTC/USDT".to_string(),
                String::new(),
                "BTC/USDT".to_string()
            ]
        );
    }

    #[test]
    fn test_split_does_not_trim() {
        assert_eq!(
            split_symbols("BTC/USDT, ETH/USDT"),
            vec!["BTC/USDT".to_string(), " ETH/USDT".to_string()]
        );
    }

    #[test]
    fn test_split_of_empty_string_is_one_empty_segment() {
        assert_eq!(split_symbols(""), vec![String::new()]);
    }
}
