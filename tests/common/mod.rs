#![allow(dead_code)]

use ai_market_intel::{Article, MarketClient, PriceBar};
use chrono::NaiveDate;
use httpmock::{Method::GET, Mock, MockServer};
use std::{fs, path::Path};
use url::Url;

pub const NEWS_KEY: &str = "test-news-key";
pub const PRICES_TOKEN: &str = "test-token";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, key, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// A client whose both upstream endpoints point at `server`.
pub fn client_for(server: &MockServer) -> MarketClient {
    MarketClient::builder()
        .base_news(Url::parse(&server.url("/v2/everything")).unwrap())
        .base_prices(Url::parse(&server.url("/tiingo/daily/")).unwrap())
        .news_api_key(NEWS_KEY)
        .prices_token(PRICES_TOKEN)
        .build()
        .unwrap()
}

/// A client aimed at a port nothing listens on, so every request fails to connect.
pub fn unreachable_client() -> MarketClient {
    MarketClient::builder()
        .base_news(Url::parse("http://127.0.0.1:1/v2/everything").unwrap())
        .base_prices(Url::parse("http://127.0.0.1:1/tiingo/daily/").unwrap())
        .news_api_key(NEWS_KEY)
        .prices_token(PRICES_TOKEN)
        .build()
        .unwrap()
}

pub fn mock_news_page<'a>(server: &'a MockServer, page: u32, page_size: u32, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("page", page.to_string())
            .query_param("pageSize", page_size.to_string())
            .query_param("apiKey", NEWS_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_daily_prices<'a>(server: &'a MockServer, ticker: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/tiingo/daily/{}/prices", ticker))
            .query_param("resampleFreq", "daily")
            .query_param("token", PRICES_TOKEN);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("prices_daily", ticker, "json"));
    })
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn article(title: &str, source: &str, description: &str) -> Article {
    Article {
        published_at: "2025-06-02".into(),
        title: title.into(),
        source: source.into(),
        url: format!("https://example.com/{}", title.len()),
        description: description.into(),
    }
}

pub fn price_row(date: &str, ticker: &str, close: f64, volume: u64) -> PriceBar {
    PriceBar {
        date: day(date),
        ticker: ticker.into(),
        close,
        high: close + 1.0,
        low: close - 1.0,
        volume,
        pct_change_1d: None,
        pct_change_5d: None,
        rolling_volatility: None,
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

pub fn is_recording() -> bool {
    std::env::var("AIMI_RECORD").ok().as_deref() == Some("1")
}

pub fn live_or_record_enabled() -> bool {
    std::env::var("AIMI_LIVE").ok().as_deref() == Some("1") || is_recording()
}
