use chrono::NaiveDate;
use futures::future::BoxFuture;

use crate::core::{DailyBar, MarketError};

/// A source of daily price bars for one ticker at a time.
///
/// This decouples [`crate::series::PriceSeriesBuilder`] from the HTTP details of
/// [`crate::history::DailyHistoryBuilder`]. It is implemented by [`crate::MarketClient`];
/// tests can provide their own implementation to simulate per-ticker failures.
pub trait PriceSource: Send + Sync {
    /// Fetches the daily bars of `ticker` between `start` and `end` (inclusive),
    /// in chronological order.
    fn fetch_daily<'a>(
        &'a self,
        ticker: &'a str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BoxFuture<'a, Result<Vec<DailyBar>, MarketError>>;
}
