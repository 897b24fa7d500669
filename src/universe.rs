//! The fixed set of tracked AI-sector companies and the topic vocabulary.

/// Ticker symbols whose daily prices are collected, in display order.
pub const TRACKED_TICKERS: &[&str] = &[
    "NVDA",  // Nvidia
    "MSFT",  // Microsoft
    "GOOGL", // Alphabet
    "META",  // Meta Platforms
    "AMD",   // Advanced Micro Devices
    "TSM",   // Taiwan Semiconductor
    "AVGO",  // Broadcom
    "PLTR",  // Palantir
    "AMZN",  // Amazon
    "SMCI",  // Super Micro Computer
];

/// Company names an article must mention to be kept.
pub const TRACKED_COMPANIES: &[&str] = &[
    "Nvidia",
    "Microsoft",
    "Google",
    "Meta",
    "AMD",
    "TSMC",
    "Broadcom",
    "Palantir",
    "Amazon",
    "Super Micro Computer",
];

/// Topic terms an article must mention (title or description) to be kept.
pub const TOPIC_TERMS: &[&str] = &["AI", "artificial intelligence"];

/// Topic terms used to build the upstream search query. Broader than [`TOPIC_TERMS`]:
/// the relevance filter narrows the results afterwards.
pub const SEARCH_TOPICS: &[&str] = &["AI", "artificial intelligence", "machine learning"];

/// Ticker selected by the dashboard when present in the stock table.
pub const PREFERRED_TICKER: &str = "NVDA";

/// Trailing window, in days, of the news search.
pub const NEWS_LOOKBACK_DAYS: i64 = 7;

/// Trailing window, in days, of the price download.
pub const PRICE_LOOKBACK_DAYS: i64 = 30;
