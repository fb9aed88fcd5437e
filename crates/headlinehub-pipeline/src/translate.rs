//! Best-effort headline translation.
//!
//! Wraps the Google-style `translate_a/single` endpoint with source-language
//! auto-detection. This is a deliberate isolation boundary: every failure —
//! invalid language code, network error, quota, unexpected response shape —
//! comes back as [`Translation::Failed`], never as an error, so one bad
//! translation cannot fail the batch.

use std::time::Duration;

use crate::error::PipelineError;
use crate::types::Translation;

/// Client for the translation endpoint.
///
/// Long-lived; constructed once per [`crate::Pipeline`]. Use the base URL
/// parameter to point at a mock server in tests.
pub struct TranslateClient {
    client: reqwest::Client,
    base_url: String,
}

impl TranslateClient {
    /// Creates a new client against the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Fetch`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, PipelineError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Translate `text` into `target_lang` (a lower-case code such as `fr`).
    ///
    /// The target code is caller-supplied and unvalidated; the endpoint is
    /// the arbiter of what it accepts. Returns [`Translation::Failed`] on any
    /// failure.
    pub async fn translate(&self, text: &str, target_lang: &str) -> Translation {
        match self.request(text, target_lang).await {
            Ok(translated) if !translated.is_empty() => Translation::Translated(translated),
            Ok(_) => {
                tracing::warn!(lang = target_lang, "translation response carried no text");
                Translation::Failed
            }
            Err(e) => {
                tracing::warn!(lang = target_lang, error = %e, "translation request failed");
                Translation::Failed
            }
        }
    }

    async fn request(&self, text: &str, target_lang: &str) -> Result<String, reqwest::Error> {
        let url = format!("{}/translate_a/single", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: serde_json::Value = response.json().await?;
        Ok(concat_segments(&body))
    }
}

/// Join the translated chunks from the endpoint's nested-array response.
///
/// The body looks like `[[["chunk", "source", ...], ...], ...]`; the first
/// element of each inner segment is the translated text. Anything that does
/// not match that shape yields an empty string.
fn concat_segments(body: &serde_json::Value) -> String {
    body.get(0)
        .and_then(serde_json::Value::as_array)
        .map(|segments| {
            segments
                .iter()
                .filter_map(|segment| segment.get(0).and_then(serde_json::Value::as_str))
                .collect::<String>()
        })
        .unwrap_or_default()
}
