use chrono::NaiveDate;

use crate::core::{DailyBar, MarketClient, MarketError, net};
use crate::history::wire::PriceRow;

pub(crate) async fn fetch_daily(
    client: &MarketClient,
    ticker: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DailyBar>, MarketError> {
    if start > end {
        return Err(MarketError::InvalidDates);
    }
    if ticker.trim().is_empty() {
        return Err(MarketError::InvalidParams("empty ticker".into()));
    }

    let mut url = client.base_prices().join(&format!("{ticker}/prices"))?;
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("startDate", &start.format("%Y-%m-%d").to_string());
        qp.append_pair("endDate", &end.format("%Y-%m-%d").to_string());
        qp.append_pair("resampleFreq", "daily");
        if let Some(token) = client.prices_token() {
            qp.append_pair("token", token);
        }
    }

    let resp = client
        .http()
        .get(url.clone())
        .send()
        .await
        .map_err(|e| MarketError::Http(e.without_url()))?;
    if !resp.status().is_success() {
        return Err(MarketError::Status {
            status: resp.status().as_u16(),
            url: redact_token(&url),
        });
    }

    let body = net::get_text(resp, "prices_daily", ticker, "json").await?;
    decode_daily(&body)
}

pub(crate) fn decode_daily(body: &str) -> Result<Vec<DailyBar>, MarketError> {
    let rows: Vec<PriceRow> = serde_json::from_str(body)
        .map_err(|e| MarketError::Data(format!("json parse error: {e}")))?;

    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let raw_date = row
            .date
            .ok_or_else(|| MarketError::Data("price row without date".into()))?;
        let date = parse_day(&raw_date)?;

        // a row needs close, high and low; a missing or invalid volume reads as 0
        let (Some(close), Some(high), Some(low)) = (row.close, row.high, row.low) else {
            continue;
        };
        let volume = row
            .volume
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map_or(0, |v| v.round() as u64);

        out.push(DailyBar {
            date,
            close,
            high,
            low,
            volume,
        });
    }

    out.sort_by_key(|b| b.date);
    Ok(out)
}

fn parse_day(raw: &str) -> Result<NaiveDate, MarketError> {
    let day = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_err(|e| MarketError::Data(format!("bad date {raw:?}: {e}")))
}

/// Error messages end up in logs; keep the API token out of them.
fn redact_token(url: &url::Url) -> String {
    let mut clean = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != "token")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    clean.query_pairs_mut().clear().extend_pairs(pairs);
    clean.to_string()
}
