//! Dashboard over the persisted stock and news tables.
//!
//! Rendering is split in two steps: [`DashboardData::view`] turns the loaded tables and
//! a [`RenderSession`] into a [`DashboardView`]; a renderer (plain text, or the terminal
//! UI behind the `tui` feature) then draws that view. All interactive state lives in the
//! session value the caller owns.

mod plain;
#[cfg(feature = "tui")]
pub mod tui;

pub use plain::render_plain;

use std::collections::HashSet;
use std::path::Path;

use chrono::{Duration, NaiveDate};

use crate::core::{Article, CuratedArticle, MarketError, PriceBar};
use crate::curate::curate;
use crate::store;
use crate::universe::PREFERRED_TICKER;

/// Days of history shown in the chart, counted back from the latest row.
pub const CHART_WINDOW_DAYS: i64 = 30;
/// Upper bound of the article count selector.
pub const MAX_ARTICLES: usize = 30;
/// Article count used when the session does not ask for one.
pub const DEFAULT_ARTICLES: usize = 10;

/// Which series the chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    /// Closing price, drawn as a line.
    #[default]
    Price,
    /// 1-day percentage change, drawn as a line.
    Change1d,
    /// Daily volume, drawn as bars.
    Volume,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Price, ChartKind::Change1d, ChartKind::Volume];

    pub const fn label(self) -> &'static str {
        match self {
            ChartKind::Price => "Price",
            ChartKind::Change1d => "1-Day %",
            ChartKind::Volume => "Volume",
        }
    }

    /// Parses the CLI spelling (`price`, `change`, `volume`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price" | "close" => Some(ChartKind::Price),
            "change" | "1d" | "pct" => Some(ChartKind::Change1d),
            "volume" | "vol" => Some(ChartKind::Volume),
            _ => None,
        }
    }

    pub const fn is_bar(self) -> bool {
        matches!(self, ChartKind::Volume)
    }
}

/// Per-viewer UI state handed to every render call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderSession {
    /// Selected ticker; `None` (or an unknown ticker) falls back to the default.
    pub ticker: Option<String>,
    pub chart: ChartKind,
    /// Requested number of curated articles; clamped when rendered.
    pub article_count: Option<usize>,
}

impl RenderSession {
    #[must_use]
    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    #[must_use]
    pub const fn with_chart(mut self, chart: ChartKind) -> Self {
        self.chart = chart;
        self
    }

    #[must_use]
    pub const fn with_article_count(mut self, count: usize) -> Self {
        self.article_count = Some(count);
        self
    }
}

/// Headline metrics of the selected ticker's latest row.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub date: NaiveDate,
    pub pct_change_1d: Option<f64>,
    pub pct_change_5d: Option<f64>,
    pub close: f64,
}

impl Metrics {
    pub fn change_1d_text(&self) -> String {
        format_pct(self.pct_change_1d)
    }

    pub fn change_5d_text(&self) -> String {
        format_pct(self.pct_change_5d)
    }

    pub fn close_text(&self) -> String {
        format!("${:.2}", self.close)
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// Selectable tickers in table order.
    pub tickers: Vec<String>,
    /// Resolved selection; `None` when the stock table is empty.
    pub ticker: Option<String>,
    pub metrics: Option<Metrics>,
    pub chart: ChartKind,
    pub chart_title: String,
    /// `(date, value)` pairs of the chart, oldest first.
    pub points: Vec<(NaiveDate, f64)>,
    pub articles: Vec<CuratedArticle>,
    /// Article count actually used (0 when no articles are available).
    pub article_count: usize,
    /// Upper bound of the article selector.
    pub max_articles: usize,
}

impl DashboardView {
    pub fn ticker_index(&self) -> Option<usize> {
        let t = self.ticker.as_deref()?;
        self.tickers.iter().position(|x| x == t)
    }
}

/// The two persisted tables, loaded once per dashboard session.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    prices: Vec<PriceBar>,
    articles: Vec<Article>,
}

impl DashboardData {
    /// Wraps already-loaded tables. Articles without a title or URL are dropped.
    pub fn new(prices: Vec<PriceBar>, articles: Vec<Article>) -> Self {
        let articles = articles
            .into_iter()
            .filter(|a| !a.title.trim().is_empty() && !a.url.trim().is_empty())
            .collect();
        Self { prices, articles }
    }

    /// Reads both tables from disk.
    pub fn load(stock_path: &Path, news_path: &Path) -> Result<Self, MarketError> {
        let prices = store::read_prices(stock_path)?;
        let articles = store::read_articles(news_path)?;
        tracing::debug!(prices = prices.len(), articles = articles.len(), "dashboard tables loaded");
        Ok(Self::new(prices, articles))
    }

    pub fn prices(&self) -> &[PriceBar] {
        &self.prices
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Tickers in order of first appearance in the stock table.
    pub fn tickers(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.prices
            .iter()
            .filter(|r| seen.insert(r.ticker.as_str()))
            .map(|r| r.ticker.clone())
            .collect()
    }

    /// [`PREFERRED_TICKER`] when present, otherwise the first ticker.
    pub fn default_ticker(&self) -> Option<String> {
        let tickers = self.tickers();
        if tickers.iter().any(|t| t == PREFERRED_TICKER) {
            return Some(PREFERRED_TICKER.to_string());
        }
        tickers.into_iter().next()
    }

    /// Upper bound of the article selector: `min(30, available)`.
    pub fn max_articles(&self) -> usize {
        MAX_ARTICLES.min(self.articles.len())
    }

    /// Builds the view for `session`.
    pub fn view(&self, session: &RenderSession) -> DashboardView {
        let tickers = self.tickers();
        let ticker = session
            .ticker
            .as_ref()
            .filter(|t| tickers.contains(t))
            .cloned()
            .or_else(|| self.default_ticker());

        let rows: Vec<&PriceBar> = match &ticker {
            Some(t) => self.prices.iter().filter(|r| &r.ticker == t).collect(),
            None => Vec::new(),
        };

        let metrics = rows.last().map(|r| Metrics {
            date: r.date,
            pct_change_1d: r.pct_change_1d,
            pct_change_5d: r.pct_change_5d,
            close: r.close,
        });

        let points = chart_points(&rows, session.chart);
        let chart_title = match (&ticker, session.chart) {
            (Some(t), ChartKind::Volume) => format!("{t} - Daily Volume ({CHART_WINDOW_DAYS} d)"),
            (Some(t), kind) => format!("{t} - {} ({CHART_WINDOW_DAYS} d)", kind.label()),
            (None, kind) => kind.label().to_string(),
        };

        let max_articles = self.max_articles();
        let article_count = clamp_count(session.article_count, max_articles);
        let articles = curate(&self.articles, article_count);

        DashboardView {
            tickers,
            ticker,
            metrics,
            chart: session.chart,
            chart_title,
            points,
            articles,
            article_count,
            max_articles,
        }
    }
}

/// Clamps a requested count into `1..=max`, defaulting to `min(10, max)`.
pub fn clamp_count(requested: Option<usize>, max: usize) -> usize {
    if max == 0 {
        return 0;
    }
    requested.unwrap_or(DEFAULT_ARTICLES.min(max)).clamp(1, max)
}

/// Formats a percentage with two decimals, `n/a` when absent.
pub fn format_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}%"),
        None => "n/a".to_string(),
    }
}

fn chart_points(rows: &[&PriceBar], chart: ChartKind) -> Vec<(NaiveDate, f64)> {
    let Some(latest) = rows.iter().map(|r| r.date).max() else {
        return Vec::new();
    };
    let cutoff = latest - Duration::days(CHART_WINDOW_DAYS);

    rows.iter()
        .filter(|r| r.date >= cutoff)
        .filter_map(|r| {
            let value = match chart {
                ChartKind::Price => Some(r.close),
                ChartKind::Change1d => r.pct_change_1d,
                ChartKind::Volume => Some(r.volume as f64),
            }?;
            Some((r.date, value))
        })
        .collect()
}
