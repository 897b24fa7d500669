//! Centralized constants for default endpoints and UA.

/// Identifies the collector to upstream APIs.
pub(crate) const USER_AGENT: &str = concat!("ai-market-intel/", env!("CARGO_PKG_VERSION"));

/// News search endpoint (newsapi.org "everything").
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://newsapi.org/v2/everything";

/// Tiingo end-of-day prices base (`<ticker>/prices` is appended).
pub(crate) const DEFAULT_BASE_PRICES: &str = "https://api.tiingo.com/tiingo/daily/";
