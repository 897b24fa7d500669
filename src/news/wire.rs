use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct SearchEnvelope {
    pub(crate) status: Option<String>,
    pub(crate) code: Option<String>,
    pub(crate) message: Option<String>,
    #[serde(rename = "totalResults")]
    pub(crate) total_results: Option<u64>,
    pub(crate) articles: Option<Vec<RawArticle>>,
}

#[derive(Deserialize)]
pub(crate) struct RawArticle {
    pub(crate) source: Option<RawSource>,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) url: Option<String>,
    #[serde(rename = "publishedAt")]
    pub(crate) published_at: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct RawSource {
    pub(crate) name: Option<String>,
}
