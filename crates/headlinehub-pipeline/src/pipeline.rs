//! Pipeline orchestration.

use std::time::Duration;

use futures::stream::{self, StreamExt};

use crate::error::PipelineError;
use crate::extract::extract_headlines;
use crate::fetch::fetch_page;
use crate::format::render_message;
use crate::scorer::score_headline;
use crate::translate::TranslateClient;
use crate::types::{FormattedHeadline, PipelineConfig};

/// The headline pipeline: fetch → extract → score/translate → format.
///
/// Holds the HTTP and translation clients for reuse across runs. Runs are
/// independent; the pipeline carries no mutable state, so one instance can
/// serve concurrent callers.
pub struct Pipeline {
    config: PipelineConfig,
    http: reqwest::Client,
    translator: TranslateClient,
}

impl Pipeline {
    /// Creates a pipeline from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Fetch`] if an underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: PipelineConfig) -> Result<Self, PipelineError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        let translator =
            TranslateClient::new(&config.translate_base_url, config.request_timeout_secs)?;
        Ok(Self {
            config,
            http,
            translator,
        })
    }

    /// Run the full pipeline for one request.
    ///
    /// 1. Fetch the news page (single attempt).
    /// 2. Extract up to the configured cap of headline cards, in document
    ///    order.
    /// 3. Score each headline; translate it when `lang` differs from the
    ///    native language code. Translation calls run concurrently with a
    ///    configured bound, and output order always matches extraction order.
    ///
    /// Scoring never fails and a failed translation degrades to a marker on
    /// that one headline, so any error from this method means the run
    /// produced nothing at all.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::Fetch`] / [`PipelineError::UnexpectedStatus`] when
    ///   the page cannot be fetched.
    /// - [`PipelineError::NoContent`] when the selector matched nothing.
    pub async fn run(&self, lang: &str) -> Result<Vec<FormattedHeadline>, PipelineError> {
        let body = fetch_page(&self.config, &self.http).await?;

        let headlines = extract_headlines(&body, &self.config);
        if headlines.is_empty() {
            tracing::warn!(
                url = %self.config.news_url,
                tag = %self.config.headline_tag,
                attr = %self.config.headline_attr,
                value = %self.config.headline_attr_value,
                "no headline cards matched; the page structure may have changed"
            );
            return Err(PipelineError::NoContent);
        }
        tracing::debug!(count = headlines.len(), "extracted headlines");

        let translating = lang != self.config.native_lang;
        let formatted: Vec<FormattedHeadline> = stream::iter(headlines)
            .map(|text| {
                let config = &self.config;
                let translator = &self.translator;
                async move {
                    let sentiment = score_headline(&text, config);
                    let translation = if translating {
                        Some(translator.translate(&text, lang).await)
                    } else {
                        None
                    };
                    FormattedHeadline {
                        text,
                        sentiment,
                        translation,
                    }
                }
            })
            // `buffered` (not `buffer_unordered`) keeps extraction order.
            .buffered(self.config.max_concurrent_translations.max(1))
            .collect()
            .await;

        Ok(formatted)
    }

    /// Run the pipeline and render the result as one transport-sized message.
    ///
    /// # Errors
    ///
    /// Same as [`Pipeline::run`].
    pub async fn run_rendered(&self, lang: &str) -> Result<String, PipelineError> {
        let headlines = self.run(lang).await?;
        let target_lang = (lang != self.config.native_lang).then_some(lang);
        Ok(render_message(
            &headlines,
            target_lang,
            self.config.message_limit,
        ))
    }
}
