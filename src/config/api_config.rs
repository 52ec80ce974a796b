//! Third-party API credential parsing from environment variables.
//!
//! Every credential is optional and defaults to absent. Absence means
//! the corresponding feed is disabled; the ingestion collaborators are
//! responsible for acting on that. No key-shape validation happens here.

use super::parse;
use serde::Serialize;

/// External API credentials
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    pub newsapi_key: Option<String>,
    pub twitter_bearer_token: Option<String>,
    pub twitter_api_key: Option<String>,
    pub twitter_api_secret: Option<String>,
    pub twitter_access_token: Option<String>,
    pub twitter_access_secret: Option<String>,
    pub polygon_key: Option<String>,
}

/// Which feeds the loaded credentials enable. This is the only view of
/// `ApiConfig` that serializes; key material never leaves the struct.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ApiAvailability {
    pub news_feed: bool,
    pub twitter: bool,
    pub market_data: bool,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            newsapi_key: parse::optional("NEWSAPI_KEY"),
            twitter_bearer_token: parse::optional("TWITTER_BEARER_TOKEN"),
            twitter_api_key: parse::optional("TWITTER_API_KEY"),
            twitter_api_secret: parse::optional("TWITTER_API_SECRET"),
            twitter_access_token: parse::optional("TWITTER_ACCESS_TOKEN"),
            twitter_access_secret: parse::optional("TWITTER_ACCESS_SECRET"),
            polygon_key: parse::optional("POLYGON_API_KEY"),
        }
    }

    pub fn news_feed_available(&self) -> bool {
        self.newsapi_key.is_some()
    }

    /// Twitter ingestion works with either app-only auth (bearer token)
    /// or the full user-context key set.
    pub fn twitter_available(&self) -> bool {
        self.twitter_bearer_token.is_some()
            || (self.twitter_api_key.is_some()
                && self.twitter_api_secret.is_some()
                && self.twitter_access_token.is_some()
                && self.twitter_access_secret.is_some())
    }

    pub fn market_data_available(&self) -> bool {
        self.polygon_key.is_some()
    }

    pub fn availability(&self) -> ApiAvailability {
        ApiAvailability {
            news_feed: self.news_feed_available(),
            twitter: self.twitter_available(),
            market_data: self.market_data_available(),
        }
    }
}
