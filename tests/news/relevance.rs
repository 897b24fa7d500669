use ai_market_intel::is_relevant;
use ai_market_intel::universe::{TOPIC_TERMS, TRACKED_COMPANIES};

fn relevant(title: &str, description: &str) -> bool {
    is_relevant(title, description, TRACKED_COMPANIES, TOPIC_TERMS)
}

#[test]
fn needs_both_an_entity_and_a_topic_term() {
    assert!(relevant("Nvidia unveils new AI accelerator", ""));
    assert!(!relevant("Microsoft earnings beat expectations", "Cloud revenue rose 20 percent."));
    assert!(!relevant("Weather outlook for the weekend", "Artificial intelligence forecasts."));
}

#[test]
fn matching_is_case_insensitive() {
    assert!(relevant("PALANTIR EXPANDS ARTIFICIAL INTELLIGENCE PLATFORM", ""));
    assert!(relevant("broadcom deal", "new ai chips"));
}

#[test]
fn either_field_can_carry_the_topic() {
    assert!(relevant("Amazon expands data centers", "Capacity is aimed at AI workloads."));
    assert!(relevant("Google plans AI push", "Details were thin."));
}

#[test]
fn entity_may_span_the_title_description_boundary() {
    // "Super Micro" + " Computer" only matches on the joined text
    assert!(is_relevant(
        "Shares of Super Micro",
        " Computer jump on AI demand",
        &["Super Micro Computer"],
        &["AI"],
    ));
}

#[test]
fn topic_term_must_sit_inside_one_field() {
    assert!(!is_relevant(
        "Nvidia bets on artificial",
        "intelligence software",
        &["Nvidia"],
        &["artificial intelligence"],
    ));
}

#[test]
fn single_entity_and_topic() {
    assert!(is_relevant("Nvidia and AI chips", "", &["Nvidia"], &["AI"]));
    assert!(!is_relevant("Nvidia chips", "", &["Nvidia"], &["AI"]));
}
