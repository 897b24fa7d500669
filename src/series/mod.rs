//! Combined multi-ticker price table with derived return and volatility fields.

pub mod derive;

use std::collections::HashSet;
use std::time::Instant;

use chrono::{Duration, NaiveDate, Utc};

use crate::core::{DailyBar, MarketError, PriceBar, PriceSource};
use crate::stats::CollectionStats;
use crate::universe::{PRICE_LOOKBACK_DAYS, TRACKED_TICKERS};
use derive::{VOLATILITY_WINDOW, pct_change, rolling_std};

/// A ticker that was skipped because its fetch failed.
#[derive(Debug)]
pub struct TickerFailure {
    pub ticker: String,
    pub error: MarketError,
}

/// The outcome of a [`PriceSeriesBuilder`] run.
#[derive(Debug)]
pub struct PriceSeries {
    /// Rows grouped by ticker (request order), chronological within a ticker.
    pub rows: Vec<PriceBar>,
    /// Tickers excluded from `rows` because their fetch failed.
    pub failures: Vec<TickerFailure>,
    pub stats: CollectionStats,
}

impl PriceSeries {
    /// Tickers present in `rows`, in order of first appearance.
    pub fn tickers(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .map(|r| r.ticker.as_str())
            .filter(|t| seen.insert(*t))
            .collect()
    }
}

/// A builder for downloading daily bars of several tickers and combining them into one
/// table.
///
/// Tickers are fetched one after another. A ticker whose fetch fails is logged and left
/// out; the remaining tickers are still returned.
pub struct PriceSeriesBuilder<'a> {
    source: &'a dyn PriceSource,
    tickers: Vec<String>,
    start: NaiveDate,
    end: NaiveDate,
}

impl<'a> PriceSeriesBuilder<'a> {
    /// Creates a builder over the tracked tickers and the default trailing window.
    #[must_use]
    pub fn new(source: &'a dyn PriceSource) -> Self {
        let end = Utc::now().date_naive();
        Self {
            source,
            tickers: TRACKED_TICKERS.iter().map(|t| (*t).to_string()).collect(),
            start: end - Duration::days(PRICE_LOOKBACK_DAYS),
            end,
        }
    }

    /// Replaces the list of tickers. Duplicates are fetched once.
    #[must_use]
    pub fn tickers<I, S>(mut self, tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        self.tickers = tickers
            .into_iter()
            .map(Into::into)
            .filter(|t: &String| seen.insert(t.clone()))
            .collect();
        self
    }

    /// Sets an absolute, inclusive date window.
    #[must_use]
    pub const fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Sets a trailing window of `days` ending today (UTC).
    #[must_use]
    pub fn lookback_days(mut self, days: i64) -> Self {
        self.end = Utc::now().date_naive();
        self.start = self.end - Duration::days(days);
        self
    }

    /// Fetches every ticker and assembles the combined table.
    ///
    /// # Errors
    ///
    /// Only an inverted date window is an error; per-ticker failures end up in
    /// [`PriceSeries::failures`].
    #[tracing::instrument(skip(self), fields(tickers = self.tickers.len(), start = %self.start, end = %self.end))]
    pub async fn run(self) -> Result<PriceSeries, MarketError> {
        if self.start > self.end {
            return Err(MarketError::InvalidDates);
        }

        let started = Instant::now();
        let mut stats = CollectionStats::new();
        let mut rows = Vec::new();
        let mut failures = Vec::new();

        for ticker in &self.tickers {
            stats.total += 1;
            match self.source.fetch_daily(ticker, self.start, self.end).await {
                Ok(bars) if bars.is_empty() => {
                    tracing::warn!(ticker = %ticker, "no bars returned; ticker left out");
                    stats.empty += 1;
                }
                Ok(bars) => {
                    let derived = attach_derived(ticker, &bars);
                    tracing::debug!(ticker = %ticker, rows = derived.len(), "ticker collected");
                    stats.success += 1;
                    stats.rows += derived.len();
                    rows.extend(derived);
                }
                Err(error) => {
                    tracing::warn!(ticker = %ticker, error = %error, "ticker fetch failed; skipping");
                    stats.errors += 1;
                    failures.push(TickerFailure {
                        ticker: ticker.clone(),
                        error,
                    });
                }
            }
        }

        stats.elapsed = started.elapsed();
        Ok(PriceSeries {
            rows,
            failures,
            stats,
        })
    }
}

/// Turns one ticker's raw bars into table rows with the derived fields attached.
///
/// Bars are put in chronological order first; a repeated date keeps its first bar.
pub fn attach_derived(ticker: &str, bars: &[DailyBar]) -> Vec<PriceBar> {
    let mut ordered: Vec<&DailyBar> = bars.iter().collect();
    ordered.sort_by_key(|b| b.date);
    ordered.dedup_by_key(|b| b.date);

    let closes: Vec<f64> = ordered.iter().map(|b| b.close).collect();
    let d1 = pct_change(&closes, 1);
    let d5 = pct_change(&closes, 5);
    let vol = rolling_std(&closes, VOLATILITY_WINDOW);

    ordered
        .into_iter()
        .enumerate()
        .map(|(i, b)| PriceBar {
            date: b.date,
            ticker: ticker.to_string(),
            close: b.close,
            high: b.high,
            low: b.low,
            volume: b.volume,
            pct_change_1d: d1[i],
            pct_change_5d: d5[i],
            rolling_volatility: vol[i],
        })
        .collect()
}
