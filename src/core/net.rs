#[cfg(feature = "test-mode")]
use std::env;

/// Read the response body as text.
/// In `test-mode`, if `AIMI_RECORD=1`, the body is saved as a fixture via `fixtures`.
///
/// Request URLs carry API credentials, so a body error is returned without its URL.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _key: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await.map_err(reqwest::Error::without_url)?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("AIMI_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _key, _ext, &text)
        {
            tracing::warn!(key = _key, error = %e, "failed to record fixture");
        }
    }

    Ok(text)
}
