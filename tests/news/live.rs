use ai_market_intel::{AppConfig, NewsCollector};

#[tokio::test]
#[ignore]
async fn live_news_smoke_and_or_record() {
    if !crate::common::live_or_record_enabled() {
        return;
    }

    let config = AppConfig::from_env().unwrap();
    config.require_news_key().unwrap();
    let client = config.client().unwrap();

    // Records `tests/fixtures/news_everything_page1.json` if AIMI_RECORD=1
    let out = NewsCollector::new(&client)
        .page_size(20)
        .max_pages(1)
        .collect()
        .await
        .unwrap();

    if !crate::common::is_recording() {
        assert!(!out.stop.is_failure(), "stopped with {:?}", out.stop);
        for a in &out.articles {
            assert_eq!(a.published_at.len(), 10);
            assert!(!a.url.is_empty());
        }
    }
}
