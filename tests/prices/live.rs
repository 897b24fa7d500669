use ai_market_intel::{AppConfig, DailyHistoryBuilder};

#[tokio::test]
#[ignore]
async fn live_daily_history_smoke_and_or_record() {
    if !crate::common::live_or_record_enabled() {
        return;
    }

    let config = AppConfig::from_env().unwrap();
    config.require_tiingo_key().unwrap();
    let client = config.client().unwrap();

    // Records `tests/fixtures/prices_daily_NVDA.json` if AIMI_RECORD=1
    let bars = DailyHistoryBuilder::new(&client, "NVDA")
        .lookback_days(30)
        .fetch()
        .await
        .unwrap();

    if !crate::common::is_recording() {
        assert!(!bars.is_empty(), "expected at least one NVDA bar");
        assert!(bars.windows(2).all(|w| w[0].date < w[1].date));
        assert!(bars.iter().all(|b| b.low <= b.high));
    }
}
