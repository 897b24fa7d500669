//! Headline curation: deduplicate raw articles and clean their descriptions for display.
//!
//! The phrases and thresholds below target artifacts of the current news feed
//! (section headers, self-quoting summaries, keyword stuffing). They are kept here as
//! constants so they can follow the feed without touching [`curate`].

use std::collections::HashSet;

use crate::core::{Article, CuratedArticle};

/// Boilerplate substrings removed verbatim from descriptions, in this order.
pub const BOILERPLATE_PHRASES: &[&str] = &["In This Article:", "Key Points", "#", "##"];

/// Longest description kept without truncation, in characters.
pub const DESC_MAX_CHARS: usize = 180;

/// Characters kept from an over-long description before [`ELLIPSIS`] is appended.
pub const DESC_TRUNCATE_AT: usize = 177;

pub const ELLIPSIS: &str = "...";

/// A description mentioning this phrase more than [`SPAM_PHRASE_MAX`] times is dropped.
pub const SPAM_PHRASE: &str = "Super Micro";
pub const SPAM_PHRASE_MAX: usize = 2;

/// A description containing this marker (case-sensitive) more than [`AI_MARKER_MAX`]
/// times is dropped.
pub const AI_MARKER: &str = "AI";
pub const AI_MARKER_MAX: usize = 6;

/// Produces at most `limit` unique, display-ready articles in input order.
///
/// Articles are unique by trimmed, lowercased title together with lowercased source; the
/// first occurrence wins and later duplicates do not count towards `limit`. The function
/// is pure and never fails: anything questionable about a description just empties it.
pub fn curate(articles: &[Article], limit: usize) -> Vec<CuratedArticle> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut out = Vec::with_capacity(limit.min(articles.len()));

    for art in articles {
        if out.len() >= limit {
            break;
        }

        let title = art.title.trim();
        let key = (title.to_lowercase(), art.source.to_lowercase());
        if !seen.insert(key) {
            continue;
        }

        out.push(CuratedArticle {
            date: art.published_at.clone(),
            title: title.to_string(),
            url: art.url.clone(),
            source: art.source.clone(),
            desc: clean_description(title, &art.description),
        });
    }

    out
}

/// Cleans one description against its (trimmed) title.
pub fn clean_description(title: &str, description: &str) -> String {
    let mut desc = collapse_whitespace(description);

    for phrase in BOILERPLATE_PHRASES {
        desc = desc.replace(phrase, "");
    }
    let mut desc = desc.trim().to_string();

    let desc_lc = desc.to_lowercase();
    let title_lc = title.to_lowercase();
    if desc_lc == title_lc || desc_lc.starts_with(&title_lc) {
        desc.clear();
    }

    let truncated = desc.chars().count() > DESC_MAX_CHARS;
    if truncated {
        desc = desc.chars().take(DESC_TRUNCATE_AT).collect();
        desc.push_str(ELLIPSIS);
    }

    if desc.matches(SPAM_PHRASE).count() > SPAM_PHRASE_MAX
        || desc.matches(AI_MARKER).count() > AI_MARKER_MAX
    {
        desc.clear();
    }

    // the ellipsis marks a cut, it is not trailing punctuation
    if truncated && !desc.is_empty() {
        return desc;
    }
    desc.trim_end_matches(['.', ' ']).trim().to_string()
}

/// Turns newlines into spaces and squeezes every run of spaces into one, then trims.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_space = false;
    for ch in text.chars() {
        let ch = if ch == '\n' || ch == '\r' { ' ' } else { ch };
        if ch == ' ' {
            if prev_space {
                continue;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
        out.push(ch);
    }
    out.trim().to_string()
}
