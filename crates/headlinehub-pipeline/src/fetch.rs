//! Single-attempt news page fetch.

use crate::error::PipelineError;
use crate::types::PipelineConfig;

/// Fetch the configured news page and return its body.
///
/// One attempt, fail fast, no retries. The client carries the browser-like
/// user agent and request timeout.
///
/// # Errors
///
/// - [`PipelineError::Fetch`] on connect failure or timeout.
/// - [`PipelineError::UnexpectedStatus`] on a non-2xx response.
pub(crate) async fn fetch_page(
    config: &PipelineConfig,
    client: &reqwest::Client,
) -> Result<String, PipelineError> {
    let response = client.get(&config.news_url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(PipelineError::UnexpectedStatus {
            status: status.as_u16(),
            url: config.news_url.clone(),
        });
    }

    let body = response.text().await?;
    tracing::debug!(url = %config.news_url, bytes = body.len(), "fetched news page");
    Ok(body)
}
