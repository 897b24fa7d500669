//! Daily price history for a single ticker.

mod fetch;
mod wire;

use chrono::{Duration, NaiveDate, Utc};
use futures::future::BoxFuture;

use crate::core::{DailyBar, MarketClient, MarketError, PriceSource};
use crate::universe::PRICE_LOOKBACK_DAYS;

/// A builder for fetching the daily bars of one ticker over a date window.
///
/// By default the window is the trailing [`PRICE_LOOKBACK_DAYS`] days ending today (UTC).
#[derive(Clone)]
pub struct DailyHistoryBuilder {
    client: MarketClient,
    ticker: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl DailyHistoryBuilder {
    /// Creates a new `DailyHistoryBuilder` for a given ticker.
    pub fn new(client: &MarketClient, ticker: impl Into<String>) -> Self {
        let end = Utc::now().date_naive();
        Self {
            client: client.clone(),
            ticker: ticker.into(),
            start: end - Duration::days(PRICE_LOOKBACK_DAYS),
            end,
        }
    }

    /// Sets an absolute, inclusive date window.
    #[must_use]
    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
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

    /// Executes the request and returns the bars in chronological order.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidDates`] if the window is inverted,
    /// [`MarketError::Status`] on a non-2xx response, and [`MarketError::Data`] if the
    /// body is not a price array.
    #[tracing::instrument(skip(self), err, fields(ticker = %self.ticker))]
    pub async fn fetch(self) -> Result<Vec<DailyBar>, MarketError> {
        let bars = fetch::fetch_daily(&self.client, &self.ticker, self.start, self.end).await?;
        tracing::debug!(bars = bars.len(), "fetched daily bars");
        Ok(bars)
    }
}

impl PriceSource for MarketClient {
    fn fetch_daily<'a>(
        &'a self,
        ticker: &'a str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BoxFuture<'a, Result<Vec<DailyBar>, MarketError>> {
        Box::pin(
            DailyHistoryBuilder::new(self, ticker)
                .between(start, end)
                .fetch(),
        )
    }
}
