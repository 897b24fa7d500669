use ai_market_intel::curate;

use crate::common::article;

#[test]
fn duplicates_by_title_and_source_are_dropped_case_insensitively() {
    let input = vec![
        article("  Nvidia Soars ", "reuters", "First take."),
        article("nvidia soars", "Reuters", "Second take."),
        article("Nvidia soars", "Bloomberg", "Other outlet."),
    ];

    let out = curate(&input, 10);

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].title, "Nvidia Soars");
    assert_eq!(out[0].desc, "First take");
    assert_eq!(out[1].source, "Bloomberg");
}

#[test]
fn limit_counts_unique_articles_only() {
    let input = vec![
        article("A", "X", ""),
        article("A", "X", ""),
        article("B", "X", ""),
        article("B", "x", ""),
        article("C", "X", ""),
        article("D", "X", ""),
        article("E", "X", ""),
    ];

    let three = curate(&input, 3);
    let titles: Vec<&str> = three.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, ["A", "B", "C"]);

    assert_eq!(curate(&input, 10).len(), 5);
    assert!(curate(&input, 0).is_empty());
    assert!(curate(&[], 5).is_empty());
}

#[test]
fn output_keys_are_unique_and_curation_is_idempotent() {
    let input = vec![
        article("Meta ships AI glasses", "Verge", "Hands on with the new glasses."),
        article("META SHIPS AI GLASSES", "verge", "Duplicate."),
        article("AMD launches MI400", "Reuters", "A new accelerator.\n\nMore soon..."),
    ];

    let first = curate(&input, 10);
    let second = curate(&input, 10);
    assert_eq!(first, second);

    let mut keys: Vec<(String, String)> = first
        .iter()
        .map(|a| (a.title.to_lowercase(), a.source.to_lowercase()))
        .collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), first.len());

    assert_eq!(first[1].desc, "A new accelerator. More soon");
}

#[test]
fn curated_fields_carry_the_article_through() {
    let mut a = article("Broadcom wins AI deal", "CNBC", "");
    a.published_at = "2025-06-03".into();
    a.url = "https://example.com/avgo".into();

    let out = curate(&[a], 1);

    assert_eq!(out[0].date, "2025-06-03");
    assert_eq!(out[0].url, "https://example.com/avgo");
    assert_eq!(out[0].desc, "");
}
