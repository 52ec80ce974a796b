use anyhow::{Context, Result};
use clap::Parser;
use sentirisk::config::{
    ApiAvailability, AppConfig, FirebaseConfig, SentimentConfig, Settings, TradingConfig,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Load, validate, and report the effective configuration of a
/// sentiment-driven risk-management deployment.
#[derive(Parser)]
#[command(name = "sentirisk", version)]
struct Args {
    /// Read environment overrides from this file instead of discovering `./.env`
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Print the effective configuration as JSON (credentials are
    /// reported as feed availability, never as values)
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct EffectiveSettings<'a> {
    firebase: &'a FirebaseConfig,
    api: ApiAvailability,
    trading: &'a TradingConfig,
    sentiment: &'a SentimentConfig,
    app: &'a AppConfig,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Apply env-file overrides before anything reads a variable, so
    // LOG_LEVEL may come from the file as well.
    match &args.env_file {
        Some(path) => dotenvy::from_path(path)
            .with_context(|| format!("failed to read environment file {}", path.display()))?,
        None => {
            dotenvy::dotenv().ok();
        }
    }

    // RUST_LOG wins when set; otherwise the filter derives from LOG_LEVEL.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(std::env::var("LOG_LEVEL").unwrap_or_else(|_| "INFO".to_string()))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let settings = Settings::load().context("failed to load configuration")?;

    if args.json {
        let effective = EffectiveSettings {
            firebase: &settings.firebase,
            api: settings.api.availability(),
            trading: &settings.trading,
            sentiment: &settings.sentiment,
            app: &settings.app,
        };
        println!("{}", serde_json::to_string_pretty(&effective)?);
        return Ok(());
    }

    let feeds = settings.api.availability();
    info!(
        "exchange {} with {} symbols, parameter refresh every {} min",
        settings.trading.exchange,
        settings.trading.symbols.len(),
        settings.trading.update_interval_minutes
    );
    info!(
        "position size {} - {}, risk multiplier {}",
        settings.trading.min_position_size,
        settings.trading.max_position_size,
        settings.trading.initial_risk_multiplier
    );
    info!(
        "feeds configured: newsapi={} twitter={} polygon={}",
        feeds.news_feed, feeds.twitter, feeds.market_data
    );
    info!(
        "firebase project {} (collection {})",
        settings.firebase.project_id, settings.firebase.collection_name
    );
    info!(
        "mock_mode={} enable_trading={} backup file {}",
        settings.app.mock_mode,
        settings.app.enable_trading,
        settings.app.backup_file.display()
    );

    Ok(())
}
