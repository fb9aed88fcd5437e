use thiserror::Error;

/// Fatal pipeline failures.
///
/// Only the fetch and extract stages can fail a run. Translation and scoring
/// problems are absorbed per headline and never surface here.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("HTTP error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("no headline cards matched the configured selector")]
    NoContent,
}
