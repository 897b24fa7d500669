use ai_market_intel::DailyBar;
use ai_market_intel::series::attach_derived;
use ai_market_intel::series::derive::{pct_change, rolling_std, sample_std_dev};

use crate::common::{approx, day};

const CLOSES: [f64; 6] = [100.0, 110.0, 90.0, 95.0, 80.0, 120.0];

#[test]
fn one_day_change_is_relative_to_previous_close() {
    let d1 = pct_change(&CLOSES, 1);

    assert_eq!(d1[0], None);
    assert!(approx(d1[1].unwrap(), 10.0));
    assert!(approx(d1[2].unwrap(), (90.0 / 110.0 - 1.0) * 100.0));
    assert_eq!(d1.len(), CLOSES.len());
}

#[test]
fn five_day_change_needs_five_prior_rows() {
    let d5 = pct_change(&CLOSES, 5);

    assert!(d5[..5].iter().all(Option::is_none));
    assert!(approx(d5[5].unwrap(), 20.0));
}

#[test]
fn zero_base_close_gives_no_change() {
    let d1 = pct_change(&[0.0, 5.0, 10.0], 1);
    assert_eq!(d1[1], None);
    assert!(approx(d1[2].unwrap(), 100.0));
}

#[test]
fn rolling_volatility_is_the_sample_std_dev_of_five_closes() {
    let vol = rolling_std(&CLOSES, 5);

    assert!(vol[..4].iter().all(Option::is_none));
    // mean 95, squared deviations 500, n - 1 = 4
    assert!(approx(vol[4].unwrap(), 125.0_f64.sqrt()));
    // mean 99, squared deviations 1020
    assert!(approx(vol[5].unwrap(), 255.0_f64.sqrt()));
}

#[test]
fn flat_prices_have_zero_volatility() {
    let vol = rolling_std(&[50.0; 5], 5);
    assert_eq!(vol[4], Some(0.0));
}

#[test]
fn std_dev_needs_two_values() {
    assert_eq!(sample_std_dev(&[]), None);
    assert_eq!(sample_std_dev(&[3.0]), None);
    assert!(approx(sample_std_dev(&[1.0, 3.0]).unwrap(), 2.0_f64.sqrt()));
}

fn bar(date: &str, close: f64) -> DailyBar {
    DailyBar {
        date: day(date),
        close,
        high: close,
        low: close,
        volume: 10,
    }
}

#[test]
fn derived_fields_follow_date_order_not_input_order() {
    let bars = vec![
        bar("2025-06-03", 110.0),
        bar("2025-06-02", 100.0),
        bar("2025-06-04", 99.0),
    ];

    let rows = attach_derived("AMD", &bars);

    let dates: Vec<_> = rows.iter().map(|r| r.date).collect();
    assert_eq!(dates, [day("2025-06-02"), day("2025-06-03"), day("2025-06-04")]);
    assert!(rows.iter().all(|r| r.ticker == "AMD"));
    assert_eq!(rows[0].pct_change_1d, None);
    assert!(approx(rows[1].pct_change_1d.unwrap(), 10.0));
    assert!(approx(rows[2].pct_change_1d.unwrap(), -10.0));
    assert!(rows.iter().all(|r| r.rolling_volatility.is_none()));
}

#[test]
fn repeated_dates_keep_one_row() {
    let bars = vec![bar("2025-06-02", 100.0), bar("2025-06-02", 101.0), bar("2025-06-03", 110.0)];

    let rows = attach_derived("AMD", &bars);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].close, 100.0);
}
