use std::fs;

use ai_market_intel::store::{self, NEWS_FILE};

use crate::common::article;

#[test]
fn news_table_keeps_order_and_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(NEWS_FILE);
    let rows = vec![
        article("Nvidia unveils new AI accelerator", "Reuters", "Chip news, with a comma."),
        article("Nvidia unveils new AI accelerator", "Reuters", "Line one\nline two"),
        article("Palantir expands AI platform", "CNBC", ""),
    ];

    store::write_articles(&path, &rows).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("PublishedAt,Title,Source,URL,Description\n"));
    assert_eq!(store::read_articles(&path).unwrap(), rows);
}

#[test]
fn empty_collection_writes_a_header_only_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(NEWS_FILE);

    store::write_articles(&path, &[]).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.trim_end(), "PublishedAt,Title,Source,URL,Description");
    assert!(store::read_articles(&path).unwrap().is_empty());
}

#[test]
fn missing_description_column_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(NEWS_FILE);
    fs::write(
        &path,
        "PublishedAt,Title,Source,URL\n2025-06-02,AMD AI chip,Reuters,https://example.com/amd\n",
    )
    .unwrap();

    let rows = store::read_articles(&path).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "");
}
