use serde::Deserialize;

/// One element of the daily prices array.
#[derive(Deserialize)]
pub(crate) struct PriceRow {
    pub(crate) date: Option<String>,
    pub(crate) close: Option<f64>,
    pub(crate) high: Option<f64>,
    pub(crate) low: Option<f64>,
    pub(crate) volume: Option<f64>,
}
