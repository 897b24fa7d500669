//! Environment-based configuration.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::core::{MarketClient, MarketError};
use crate::store::{NEWS_FILE, STOCK_FILE};
use crate::universe::{NEWS_LOOKBACK_DAYS, PRICE_LOOKBACK_DAYS};

/// Application settings read from the process environment (and `.env`, if present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding both CSV tables.
    pub data_dir: PathBuf,
    /// `NEWS_API_KEY`; required by the news collector.
    pub news_api_key: Option<String>,
    /// `TIINGO_API_KEY`; required by the price collector.
    pub tiingo_api_key: Option<String>,
    pub news_base_url: Option<Url>,
    pub prices_base_url: Option<Url>,
    /// Per-request timeout applied to both APIs.
    pub http_timeout: Duration,
    pub news_max_pages: u32,
    pub news_lookback_days: i64,
    pub price_lookback_days: i64,
}

impl AppConfig {
    /// Loads `.env` (when present) and reads the `AIMI_*` and API key variables.
    ///
    /// Missing API keys are not an error here; [`AppConfig::require_news_key`] and
    /// [`AppConfig::require_tiingo_key`] check them for the commands that need them.
    pub fn from_env() -> Result<Self, MarketError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            data_dir: std::env::var("AIMI_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            news_api_key: non_empty_var("NEWS_API_KEY"),
            tiingo_api_key: non_empty_var("TIINGO_API_KEY"),
            news_base_url: url_var("AIMI_NEWS_BASE_URL")?,
            prices_base_url: url_var("AIMI_PRICES_BASE_URL")?,
            http_timeout: Duration::from_secs(env_var_parse("AIMI_HTTP_TIMEOUT_SECS", 30)),
            news_max_pages: env_var_parse("AIMI_NEWS_MAX_PAGES", 3),
            news_lookback_days: env_var_parse("AIMI_NEWS_LOOKBACK_DAYS", NEWS_LOOKBACK_DAYS),
            price_lookback_days: env_var_parse("AIMI_PRICE_LOOKBACK_DAYS", PRICE_LOOKBACK_DAYS),
        })
    }

    pub fn stock_path(&self) -> PathBuf {
        self.data_dir.join(STOCK_FILE)
    }

    pub fn news_path(&self) -> PathBuf {
        self.data_dir.join(NEWS_FILE)
    }

    pub fn require_news_key(&self) -> Result<&str, MarketError> {
        self.news_api_key
            .as_deref()
            .ok_or_else(|| MarketError::Config("NEWS_API_KEY is not set".into()))
    }

    pub fn require_tiingo_key(&self) -> Result<&str, MarketError> {
        self.tiingo_api_key
            .as_deref()
            .ok_or_else(|| MarketError::Config("TIINGO_API_KEY is not set".into()))
    }

    /// Builds a client carrying whichever keys and endpoint overrides are configured.
    pub fn client(&self) -> Result<MarketClient, MarketError> {
        let mut b = MarketClient::builder()
            .timeout(self.http_timeout)
            .connect_timeout(self.http_timeout.min(Duration::from_secs(10)));
        if let Some(key) = &self.news_api_key {
            b = b.news_api_key(key.clone());
        }
        if let Some(token) = &self.tiingo_api_key {
            b = b.prices_token(token.clone());
        }
        if let Some(u) = &self.news_base_url {
            b = b.base_news(u.clone());
        }
        if let Some(u) = &self.prices_base_url {
            b = b.base_prices(u.clone());
        }
        b.build()
    }
}

/// Parses an environment variable, falling back to `default` when unset or malformed.
fn env_var_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn url_var(key: &str) -> Result<Option<Url>, MarketError> {
    match non_empty_var(key) {
        Some(raw) => Url::parse(&raw)
            .map(Some)
            .map_err(|e| MarketError::Config(format!("{key}: {e}"))),
        None => Ok(None),
    }
}
