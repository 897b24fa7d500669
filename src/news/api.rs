use chrono::NaiveDate;

use crate::{
    core::{Article, MarketClient, MarketError, net},
    news::wire::{RawArticle, SearchEnvelope},
};

/// Fixed request parameters shared by every page of one collection run.
pub(super) struct SearchParams<'a> {
    pub(super) query: &'a str,
    pub(super) from: NaiveDate,
    pub(super) to: NaiveDate,
    pub(super) language: &'a str,
    pub(super) sort_by: &'a str,
    pub(super) page_size: u32,
}

/// One decoded result page.
pub(super) struct Page {
    pub(super) total_results: u64,
    pub(super) articles: Vec<RawArticle>,
}

pub(super) async fn fetch_page(
    client: &MarketClient,
    params: &SearchParams<'_>,
    page: u32,
) -> Result<Page, MarketError> {
    let mut url = client.base_news().clone();
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("q", params.query)
            .append_pair("from", &params.from.format("%Y-%m-%d").to_string())
            .append_pair("to", &params.to.format("%Y-%m-%d").to_string())
            .append_pair("language", params.language)
            .append_pair("sortBy", params.sort_by)
            .append_pair("pageSize", &params.page_size.to_string())
            .append_pair("page", &page.to_string());
        if let Some(key) = client.news_api_key() {
            qp.append_pair("apiKey", key);
        }
    }

    let resp = client
        .http()
        .get(url.clone())
        .send()
        .await
        .map_err(|e| MarketError::Http(e.without_url()))?;
    let status = resp.status();

    let body = net::get_text(resp, "news_everything", &format!("page{page}"), "json").await?;

    // Error payloads come with 4xx codes; prefer the API's own code/message when present.
    let envelope: SearchEnvelope = match serde_json::from_str(&body) {
        Ok(env) => env,
        Err(e) if status.is_success() => return Err(MarketError::Json(e)),
        Err(_) => {
            return Err(MarketError::Status {
                status: status.as_u16(),
                url: client.base_news().to_string(),
            });
        }
    };

    if envelope.status.as_deref() != Some("ok") {
        return Err(MarketError::Api {
            code: envelope.code.unwrap_or_default(),
            message: envelope.message.unwrap_or_default(),
        });
    }
    if !status.is_success() {
        return Err(MarketError::Status {
            status: status.as_u16(),
            url: client.base_news().to_string(),
        });
    }

    Ok(Page {
        total_results: envelope.total_results.unwrap_or(0),
        articles: envelope.articles.unwrap_or_default(),
    })
}

/// Flattens an upstream item; absent fields become empty strings.
pub(super) fn to_article(raw: RawArticle) -> Article {
    let published_at = raw
        .published_at
        .map(|p| p.chars().take(10).collect())
        .unwrap_or_default();

    Article {
        published_at,
        title: raw.title.unwrap_or_default(),
        source: raw.source.and_then(|s| s.name).unwrap_or_default(),
        url: raw.url.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
    }
}
