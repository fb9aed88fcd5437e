//! Headline pipeline for HeadlineHub.
//!
//! Fetches the configured news page, extracts headline cards via a
//! structural selector, scores each headline with a lexicon, optionally
//! translates it into a target language, and renders the batch as a single
//! chat-sized message.
//!
//! Fetch and extract failures fail the whole run; scoring and translation
//! failures degrade the affected headline only and never escape the
//! pipeline boundary.

pub mod error;
pub mod format;
pub mod pipeline;
pub mod scorer;
pub mod translate;
pub mod types;

mod extract;
mod fetch;

pub use error::PipelineError;
pub use format::{render_message, TRANSLATION_FAILURE_MARKER};
pub use pipeline::Pipeline;
pub use scorer::{classify, lexicon_score};
pub use translate::TranslateClient;
pub use types::{FormattedHeadline, PipelineConfig, Sentiment, SentimentClass, Translation};
