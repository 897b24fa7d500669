//! Flat CSV persistence for the stock and news tables.
//!
//! Files are always replaced as a whole: rows are serialized in memory, written to a
//! temporary file next to the target and renamed over it.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::core::{Article, MarketError, PriceBar};

/// File name of the combined stock table inside the data directory.
pub const STOCK_FILE: &str = "ai_stock_data.csv";
/// File name of the news table inside the data directory.
pub const NEWS_FILE: &str = "ai_news_feed.csv";

pub const STOCK_COLUMNS: &[&str] = &[
    "Date",
    "Ticker",
    "Close",
    "High",
    "Low",
    "Volume",
    "% Change (1d)",
    "% Change (5d)",
    "Rolling Volatility",
];
pub const NEWS_COLUMNS: &[&str] = &["PublishedAt", "Title", "Source", "URL", "Description"];

/// What [`save_prices_if_changed`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The file was (re)written.
    Written,
    /// The persisted table already equals the new one; the file was left untouched.
    Unchanged,
    /// There was nothing to save; any existing file was left untouched.
    Empty,
}

pub fn read_prices(path: &Path) -> Result<Vec<PriceBar>, MarketError> {
    read_rows(path)
}

pub fn write_prices(path: &Path, rows: &[PriceBar]) -> Result<(), MarketError> {
    replace_atomically(path, &to_csv_bytes(rows, STOCK_COLUMNS)?)
}

/// Persists `rows` unless the file at `path` already holds an equal table.
///
/// An existing file that cannot be parsed counts as different and is overwritten.
pub fn save_prices_if_changed(path: &Path, rows: &[PriceBar]) -> Result<SaveOutcome, MarketError> {
    if rows.is_empty() {
        return Ok(SaveOutcome::Empty);
    }
    if path.exists() {
        match read_prices(path) {
            Ok(existing) if existing == rows => return Ok(SaveOutcome::Unchanged),
            Ok(_) => {}
            Err(e) => tracing::debug!(path = %path.display(), error = %e, "existing stock table unreadable; replacing"),
        }
    }
    write_prices(path, rows)?;
    Ok(SaveOutcome::Written)
}

pub fn read_articles(path: &Path) -> Result<Vec<Article>, MarketError> {
    read_rows(path)
}

pub fn write_articles(path: &Path, rows: &[Article]) -> Result<(), MarketError> {
    replace_atomically(path, &to_csv_bytes(rows, NEWS_COLUMNS)?)
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, MarketError> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut out = Vec::new();
    for row in rdr.deserialize() {
        out.push(row?);
    }
    Ok(out)
}

fn to_csv_bytes<T: Serialize>(rows: &[T], header: &[&str]) -> Result<Vec<u8>, MarketError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(!rows.is_empty())
        .from_writer(Vec::new());
    // serde only emits the header alongside the first record
    if rows.is_empty() {
        wtr.write_record(header)?;
    }
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.into_inner().map_err(|e| MarketError::Io(e.into_error()))
}

fn replace_atomically(path: &Path, bytes: &[u8]) -> Result<(), MarketError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;
    Ok(())
}
