//! Public client surface + builder.
//! Endpoint defaults live in `constants`.

mod constants;

use crate::core::MarketError;
use constants::{DEFAULT_BASE_NEWS, DEFAULT_BASE_PRICES, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Shared HTTP client plus the endpoints and credentials of both upstream APIs.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct MarketClient {
    http: Client,
    base_news: Url,
    base_prices: Url,
    news_api_key: Option<String>,
    prices_token: Option<String>,
}

impl MarketClient {
    /// Create a new builder.
    pub fn builder() -> MarketClientBuilder {
        MarketClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn base_prices(&self) -> &Url {
        &self.base_prices
    }
    pub(crate) fn news_api_key(&self) -> Option<&str> {
        self.news_api_key.as_deref()
    }
    pub(crate) fn prices_token(&self) -> Option<&str> {
        self.prices_token.as_deref()
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct MarketClientBuilder {
    user_agent: Option<String>,
    base_news: Option<Url>,
    base_prices: Option<Url>,
    news_api_key: Option<String>,
    prices_token: Option<String>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl MarketClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the news search endpoint (e.g., `https://newsapi.org/v2/everything`).
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Override the daily prices base (e.g., `https://api.tiingo.com/tiingo/daily/`).
    ///
    /// The ticker path segment is joined onto this URL, so it should end with `/`.
    pub fn base_prices(mut self, url: Url) -> Self {
        self.base_prices = Some(url);
        self
    }

    /// API key sent as `apiKey` to the news search API.
    pub fn news_api_key(mut self, key: impl Into<String>) -> Self {
        self.news_api_key = Some(key.into());
        self
    }

    /// Token sent as `token` to the prices API.
    pub fn prices_token(mut self, token: impl Into<String>) -> Self {
        self.prices_token = Some(token.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<MarketClient, MarketError> {
        let base_news = match self.base_news {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_NEWS)?,
        };
        let base_prices = match self.base_prices {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_PRICES)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(MarketClient {
            http,
            base_news,
            base_prices,
            news_api_key: self.news_api_key,
            prices_token: self.prices_token,
        })
    }
}
