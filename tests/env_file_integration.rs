//! End-to-end checks of the `.env`-file override path: a local
//! key-value file applied before loading takes effect for unset
//! variables but never overrides the real process environment.

use sentirisk::config::Settings;
use std::env;
use std::fs;
use std::sync::{Mutex, OnceLock};
use tempfile::TempDir;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

const KEYS: &[&str] = &[
    "TRADING_EXCHANGE",
    "TRADING_SYMBOLS",
    "MAX_POSITION_SIZE",
    "ENABLE_TRADING",
    "NEWSAPI_KEY",
    "BACKUP_FILE",
];

fn reset_env() {
    for key in KEYS {
        env::remove_var(key);
    }
}

#[test]
fn test_env_file_overrides_apply_to_load() {
    let _guard = get_env_lock().lock().unwrap();
    reset_env();

    let dir = TempDir::new().unwrap();
    let backup_file = dir.path().join("store").join("risk_params_backup.json");
    let env_path = dir.path().join("local.env");
    fs::write(
        &env_path,
        format!(
            "TRADING_EXCHANGE=coinbase\n\
             TRADING_SYMBOLS=BTC/USD,ETH/USD\n\
             MAX_POSITION_SIZE=7500.0\n\
             ENABLE_TRADING=True\n\
             NEWSAPI_KEY=file-key\n\
             BACKUP_FILE={}\n",
            backup_file.display()
        ),
    )
    .unwrap();

    dotenvy::from_path(&env_path).unwrap();
    let settings = Settings::load().unwrap();

    assert_eq!(settings.trading.exchange, "coinbase");
    assert_eq!(settings.trading.symbols, vec!["BTC/USD", "ETH/USD"]);
    assert_eq!(settings.trading.max_position_size, 7500.0);
    assert!(settings.app.enable_trading);
    assert_eq!(settings.api.newsapi_key.as_deref(), Some("file-key"));
    // Loading created the backup parent directory named in the file.
    assert!(backup_file.parent().unwrap().exists());

    reset_env();
}

#[test]
fn test_process_environment_wins_over_env_file() {
    let _guard = get_env_lock().lock().unwrap();
    reset_env();

    let dir = TempDir::new().unwrap();
    env::set_var(
        "BACKUP_FILE",
        dir.path().join("risk_params_backup.json"),
    );
    env::set_var("TRADING_EXCHANGE", "kraken");

    let env_path = dir.path().join("local.env");
    fs::write(&env_path, "TRADING_EXCHANGE=coinbase\n").unwrap();

    dotenvy::from_path(&env_path).unwrap();
    let settings = Settings::load().unwrap();

    assert_eq!(settings.trading.exchange, "kraken");

    reset_env();
}
