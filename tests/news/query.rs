use ai_market_intel::news::build_query;
use ai_market_intel::universe::{SEARCH_TOPICS, TRACKED_COMPANIES};

#[test]
fn groups_topics_and_entities() {
    let q = build_query(&["AI", "machine learning"], &["Nvidia", "Super Micro Computer"]);
    assert_eq!(q, r#"(AI OR "machine learning") AND (Nvidia OR "Super Micro Computer")"#);
}

#[test]
fn default_query_covers_every_tracked_company() {
    let q = build_query(SEARCH_TOPICS, TRACKED_COMPANIES);
    for company in TRACKED_COMPANIES {
        assert!(q.contains(company), "missing {company} in {q}");
    }
    assert!(q.starts_with("(AI OR "));
}
