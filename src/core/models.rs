use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/* ----- NEWS (shared by news/, curate/, store/ and dashboard/) ----- */

/// A raw article row as collected from the news search API.
///
/// `published_at` is kept verbatim (the date part of the upstream timestamp) so that
/// malformed dates flow through untouched. A missing description is the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "PublishedAt")]
    pub published_at: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Description", default)]
    pub description: String,
}

/// A deduplicated, cleaned article ready for display. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CuratedArticle {
    pub date: String,
    pub title: String,
    pub url: String,
    pub source: String,
    /// Cleaned description; empty when it was redundant, spammy or absent.
    pub desc: String,
}

/* ----- PRICES (shared by history/, series/, store/ and dashboard/) ----- */

/// One raw daily row from the prices API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub volume: u64,
}

/// One row of the combined stock table, keyed by (`date`, `ticker`).
///
/// Derived fields are `None` where the series is too short for their lookback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Ticker")]
    pub ticker: String,
    #[serde(rename = "Close")]
    pub close: f64,
    #[serde(rename = "High")]
    pub high: f64,
    #[serde(rename = "Low")]
    pub low: f64,
    #[serde(rename = "Volume")]
    pub volume: u64,
    #[serde(rename = "% Change (1d)")]
    pub pct_change_1d: Option<f64>,
    #[serde(rename = "% Change (5d)")]
    pub pct_change_5d: Option<f64>,
    #[serde(rename = "Rolling Volatility")]
    pub rolling_volatility: Option<f64>,
}
