//! Core components of the `ai-market-intel` crate.
//!
//! This module contains the foundational building blocks shared by the collectors and the
//! dashboard:
//! - The [`MarketClient`] and its builder.
//! - The primary [`MarketError`] type.
//! - Shared data models like [`Article`] and [`PriceBar`].
//! - Internal networking helpers.

/// The client (`MarketClient`), builder, and endpoint defaults.
pub mod client;
/// The primary error type (`MarketError`) for the crate.
pub mod error;
/// Shared data models used across collectors, storage and the dashboard.
pub mod models;
/// Service traits for abstracting per-ticker price fetching.
pub mod services;

#[cfg(feature = "dataframe")]
/// Polars export of collected tables.
pub mod dataframe;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::MarketClient`
pub use client::{MarketClient, MarketClientBuilder};
pub use error::MarketError;
pub use models::{Article, CuratedArticle, DailyBar, PriceBar};
pub use services::PriceSource;
