//! ai-market-intel: daily prices and AI-sector headlines for a fixed set of companies.
//!
//! Two batch collectors feed flat CSV tables:
//! - [`PriceSeriesBuilder`] downloads daily bars per ticker and derives 1-day and 5-day
//!   percentage changes plus a 5-day rolling volatility.
//! - [`NewsCollector`] pages through a news search API and keeps articles that mention a
//!   tracked company together with an AI topic term.
//!
//! The [`dashboard`] reads both tables and lists headlines run through [`curate`].
//!
//! ```no_run
//! use ai_market_intel::{MarketClient, NewsCollector, PriceSeriesBuilder, store};
//!
//! # async fn run() -> Result<(), ai_market_intel::MarketError> {
//! let client = MarketClient::builder()
//!     .news_api_key("news-key")
//!     .prices_token("tiingo-token")
//!     .build()?;
//!
//! let series = PriceSeriesBuilder::new(&client).run().await?;
//! store::save_prices_if_changed("data/ai_stock_data.csv".as_ref(), &series.rows)?;
//!
//! let news = NewsCollector::new(&client).collect().await?;
//! store::write_articles("data/ai_news_feed.csv".as_ref(), &news.articles)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod curate;
pub mod dashboard;
pub mod history;
pub mod news;
pub mod series;
pub mod stats;
pub mod store;
pub mod universe;

pub use config::AppConfig;
pub use core::{
    Article, CuratedArticle, DailyBar, MarketClient, MarketClientBuilder, MarketError, PriceBar,
    PriceSource,
};
pub use curate::curate;
pub use dashboard::{ChartKind, DashboardData, DashboardView, RenderSession};
pub use history::DailyHistoryBuilder;
pub use news::{NewsCollection, NewsCollector, StopReason, is_relevant};
pub use series::{PriceSeries, PriceSeriesBuilder, TickerFailure};
pub use stats::CollectionStats;

#[cfg(feature = "dataframe")]
pub use core::dataframe::ToDataFrame;
