use std::fs;

use ai_market_intel::PriceBar;
use ai_market_intel::series::attach_derived;
use ai_market_intel::store::{self, STOCK_FILE, SaveOutcome};
use ai_market_intel::DailyBar;

use crate::common::{day, price_row};

fn table() -> Vec<PriceBar> {
    let bars: Vec<DailyBar> = [100.0, 110.0, 90.0, 95.0, 80.0, 120.0]
        .iter()
        .enumerate()
        .map(|(i, &close)| DailyBar {
            date: day("2025-06-02") + chrono::Duration::days(i as i64),
            close,
            high: close + 0.5,
            low: close - 0.5,
            volume: 1_000 + i as u64,
        })
        .collect();
    attach_derived("NVDA", &bars)
}

#[test]
fn header_uses_the_table_column_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(STOCK_FILE);

    store::write_prices(&path, &table()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let header = text.lines().next().unwrap();
    assert_eq!(
        header,
        "Date,Ticker,Close,High,Low,Volume,% Change (1d),% Change (5d),Rolling Volatility"
    );
    // derived fields without enough history are empty cells
    let first = text.lines().nth(1).unwrap();
    assert!(first.starts_with("2025-06-02,NVDA,100.0,100.5,99.5,1000,"));
    assert!(first.ends_with(",,"));
}

#[test]
fn saving_an_identical_table_leaves_the_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(STOCK_FILE);
    let rows = table();

    assert_eq!(store::save_prices_if_changed(&path, &rows).unwrap(), SaveOutcome::Written);
    let before = fs::read(&path).unwrap();
    let modified = fs::metadata(&path).unwrap().modified().unwrap();

    assert_eq!(store::save_prices_if_changed(&path, &rows).unwrap(), SaveOutcome::Unchanged);

    assert_eq!(fs::read(&path).unwrap(), before);
    assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), modified);
}

#[test]
fn changed_table_is_rewritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(STOCK_FILE);
    let mut rows = table();
    store::save_prices_if_changed(&path, &rows).unwrap();

    rows.push(price_row("2025-06-10", "NVDA", 125.0, 5_000));

    assert_eq!(store::save_prices_if_changed(&path, &rows).unwrap(), SaveOutcome::Written);
    assert_eq!(store::read_prices(&path).unwrap(), rows);
}

#[test]
fn empty_table_is_never_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(STOCK_FILE);

    assert_eq!(store::save_prices_if_changed(&path, &[]).unwrap(), SaveOutcome::Empty);
    assert!(!path.exists());

    let rows = table();
    store::save_prices_if_changed(&path, &rows).unwrap();
    assert_eq!(store::save_prices_if_changed(&path, &[]).unwrap(), SaveOutcome::Empty);
    assert_eq!(store::read_prices(&path).unwrap(), rows);
}

#[test]
fn unreadable_existing_file_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(STOCK_FILE);
    fs::write(&path, "not,a\nstock,table,at,all\n").unwrap();

    let rows = table();
    assert_eq!(store::save_prices_if_changed(&path, &rows).unwrap(), SaveOutcome::Written);
    assert_eq!(store::read_prices(&path).unwrap(), rows);
}

#[test]
fn reads_a_table_written_by_another_tool() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(STOCK_FILE);
    fs::write(
        &path,
        "Date,Ticker,Close,High,Low,Volume,% Change (1d),% Change (5d),Rolling Volatility\n\
         2025-06-02,AMD,118.0,119.0,117.0,900,,,\n\
         2025-06-03,AMD,120.5,121.0,119.0,1100,2.1186440677966,,\n",
    )
    .unwrap();

    let rows = store::read_prices(&path).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].ticker, "AMD");
    assert_eq!(rows[0].pct_change_1d, None);
    assert_eq!(rows[1].volume, 1100);
    assert!((rows[1].pct_change_1d.unwrap() - 2.1186440677966).abs() < 1e-12);
}

#[test]
fn parent_directories_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("data").join(STOCK_FILE);

    store::write_prices(&path, &table()).unwrap();

    assert!(path.exists());
}
