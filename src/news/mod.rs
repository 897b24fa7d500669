//! Paginated news search with a topical relevance filter.

mod api;
pub mod relevance;
mod wire;

pub use relevance::is_relevant;

use std::time::Instant;

use chrono::{Duration, NaiveDate, Utc};

use crate::{
    core::{Article, MarketClient, MarketError},
    stats::CollectionStats,
    universe::{NEWS_LOOKBACK_DAYS, SEARCH_TOPICS, TOPIC_TERMS, TRACKED_COMPANIES},
};
use api::SearchParams;

/// Largest page size the search API accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Why a collection run stopped paginating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The API answered with a non-success status.
    ApiError { code: String, message: String },
    /// The page could not be fetched or decoded.
    Transport(String),
    /// A page came back without items.
    EmptyPage,
    /// Every reported result has been paged through.
    Exhausted,
    /// The page budget was used up.
    PageLimit,
}

impl StopReason {
    /// `true` when pagination ended because of a failure rather than running out of data.
    pub fn is_failure(&self) -> bool {
        matches!(self, StopReason::ApiError { .. } | StopReason::Transport(_))
    }
}

/// The outcome of a [`NewsCollector`] run.
#[derive(Debug, Clone)]
pub struct NewsCollection {
    /// Relevant articles in upstream order, duplicates included.
    pub articles: Vec<Article>,
    /// Pages that were fetched and decoded successfully.
    pub pages_fetched: u32,
    /// `totalResults` reported by the last successful page.
    pub total_results: Option<u64>,
    pub stop: StopReason,
    pub stats: CollectionStats,
}

impl NewsCollection {
    /// `false` when the run failed before collecting any article; the previous table
    /// should then be kept.
    pub fn is_worth_saving(&self) -> bool {
        !(self.stop.is_failure() && self.articles.is_empty())
    }
}

/// A builder for collecting recent articles about the tracked companies.
///
/// Defaults mirror the tracked universe: the ten tracked company names as entities,
/// `AI`/`artificial intelligence` as topic terms, a trailing
/// [`NEWS_LOOKBACK_DAYS`]-day window, English results sorted by publication time,
/// 100 results per page and at most 3 pages.
pub struct NewsCollector {
    client: MarketClient,
    entities: Vec<String>,
    topic_terms: Vec<String>,
    search_topics: Vec<String>,
    from: NaiveDate,
    to: NaiveDate,
    language: String,
    sort_by: String,
    page_size: u32,
    max_pages: u32,
}

impl NewsCollector {
    /// Creates a new `NewsCollector` with the default query and window.
    pub fn new(client: &MarketClient) -> Self {
        let to = Utc::now().date_naive();
        Self {
            client: client.clone(),
            entities: to_owned(TRACKED_COMPANIES),
            topic_terms: to_owned(TOPIC_TERMS),
            search_topics: to_owned(SEARCH_TOPICS),
            from: to - Duration::days(NEWS_LOOKBACK_DAYS),
            to,
            language: "en".into(),
            sort_by: "publishedAt".into(),
            page_size: MAX_PAGE_SIZE,
            max_pages: 3,
        }
    }

    /// Entity names; an article must mention at least one.
    #[must_use]
    pub fn entities<I, S>(mut self, entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entities = entities.into_iter().map(Into::into).collect();
        self
    }

    /// Topic terms used by the relevance filter.
    #[must_use]
    pub fn topic_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topic_terms = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Topic terms OR-ed into the upstream search query.
    #[must_use]
    pub fn search_topics<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_topics = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Sets an absolute, inclusive date window.
    #[must_use]
    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Sets a trailing window of `days` ending today (UTC).
    #[must_use]
    pub fn lookback_days(mut self, days: i64) -> Self {
        self.to = Utc::now().date_naive();
        self.from = self.to - Duration::days(days);
        self
    }

    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = sort_by.into();
        self
    }

    /// Results per page, `1..=100`.
    #[must_use]
    pub const fn page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }

    /// Upper bound on fetched pages.
    #[must_use]
    pub const fn max_pages(mut self, pages: u32) -> Self {
        self.max_pages = pages;
        self
    }

    /// The boolean search query sent upstream.
    pub fn query(&self) -> String {
        build_query(&self.search_topics, &self.entities)
    }

    /// Pages through the search results and keeps the relevant articles.
    ///
    /// Pagination stops on the first of: a non-success API status (or a failed fetch),
    /// an empty page, `page * page_size >= totalResults`, or the page budget. Articles
    /// gathered before the stop are always returned.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidParams`] for a page size outside `1..=100` or a zero
    /// page budget, and [`MarketError::InvalidDates`] if `from` is after `to`. Upstream
    /// failures are reported through [`NewsCollection::stop`], not as errors.
    #[tracing::instrument(skip(self), fields(from = %self.from, to = %self.to))]
    pub async fn collect(self) -> Result<NewsCollection, MarketError> {
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(MarketError::InvalidParams(format!(
                "page size must be within 1..={MAX_PAGE_SIZE}, got {}",
                self.page_size
            )));
        }
        if self.max_pages == 0 {
            return Err(MarketError::InvalidParams("max pages must be at least 1".into()));
        }
        if self.from > self.to {
            return Err(MarketError::InvalidDates);
        }

        let started = Instant::now();
        let query = self.query();
        let params = SearchParams {
            query: &query,
            from: self.from,
            to: self.to,
            language: &self.language,
            sort_by: &self.sort_by,
            page_size: self.page_size,
        };

        let mut stats = CollectionStats::new();
        let mut articles = Vec::new();
        let mut pages_fetched = 0;
        let mut total_results = None;
        let mut stop = StopReason::PageLimit;

        for page in 1..=self.max_pages {
            stats.total += 1;
            let fetched = match api::fetch_page(&self.client, &params, page).await {
                Ok(p) => p,
                Err(MarketError::Api { code, message }) => {
                    tracing::warn!(page, code = %code, message = %message, "news API reported an error; stopping");
                    stats.errors += 1;
                    stop = StopReason::ApiError { code, message };
                    break;
                }
                Err(e) => {
                    tracing::warn!(page, error = %e, "news page fetch failed; stopping");
                    stats.errors += 1;
                    stop = StopReason::Transport(e.to_string());
                    break;
                }
            };

            pages_fetched += 1;
            total_results = Some(fetched.total_results);

            if fetched.articles.is_empty() {
                stats.empty += 1;
                stop = StopReason::EmptyPage;
                break;
            }
            stats.success += 1;

            let before = articles.len();
            for raw in fetched.articles {
                let article = api::to_article(raw);
                if is_relevant(
                    &article.title,
                    &article.description,
                    &self.entities,
                    &self.topic_terms,
                ) {
                    articles.push(article);
                } else {
                    stats.filtered += 1;
                }
            }
            tracing::debug!(page, kept = articles.len() - before, total = fetched.total_results, "news page processed");

            if u64::from(page) * u64::from(self.page_size) >= fetched.total_results {
                stop = StopReason::Exhausted;
                break;
            }
        }

        stats.rows = articles.len();
        stats.elapsed = started.elapsed();

        Ok(NewsCollection {
            articles,
            pages_fetched,
            total_results,
            stop,
            stats,
        })
    }
}

/// Builds `(<topic> OR ...) AND (<entity> OR ...)`, quoting multi-word terms.
pub fn build_query<T, E>(topics: &[T], entities: &[E]) -> String
where
    T: AsRef<str>,
    E: AsRef<str>,
{
    fn group<S: AsRef<str>>(terms: &[S]) -> String {
        let parts: Vec<String> = terms
            .iter()
            .map(|t| {
                let t = t.as_ref().trim();
                if t.contains(char::is_whitespace) {
                    format!("\"{t}\"")
                } else {
                    t.to_string()
                }
            })
            .collect();
        format!("({})", parts.join(" OR "))
    }

    match (topics.is_empty(), entities.is_empty()) {
        (true, true) => String::new(),
        (false, true) => group(topics),
        (true, false) => group(entities),
        (false, false) => format!("{} AND {}", group(topics), group(entities)),
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
