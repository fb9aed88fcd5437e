/// Discrete sentiment class derived from a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentClass {
    Positive,
    Neutral,
    Negative,
}

impl SentimentClass {
    /// Compact glyph rendered next to the headline text.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            SentimentClass::Positive => "🙂",
            SentimentClass::Neutral => "😐",
            SentimentClass::Negative => "🙁",
        }
    }
}

/// Polarity score in `[-1.0, 1.0]` plus its derived class. Immutable once
/// computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    pub polarity: f32,
    pub class: SentimentClass,
}

/// Outcome of one translation attempt. Failure is a value, never an error —
/// one bad language code must not fail the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Translated(String),
    Failed,
}

/// Display-ready composition of one headline. Output order matches
/// extraction order (top-to-bottom on the source page).
#[derive(Debug, Clone)]
pub struct FormattedHeadline {
    pub text: String,
    pub sentiment: Sentiment,
    /// `None` when no translation was requested for the run.
    pub translation: Option<Translation>,
}

/// Pipeline configuration, read-only after construction.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub news_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    /// Headline card signature: tag plus one attribute/value pair.
    pub headline_tag: String,
    pub headline_attr: String,
    pub headline_attr_value: String,
    /// Cap on headlines per run.
    pub max_headlines: usize,
    /// Language code that skips translation entirely.
    pub native_lang: String,
    pub translate_base_url: String,
    /// Polarity above this is positive; boundary value is neutral.
    pub positive_threshold: f32,
    /// Polarity below this is negative; boundary value is neutral.
    pub negative_threshold: f32,
    /// Transport message length ceiling, in characters.
    pub message_limit: usize,
    /// Bound on in-flight translation requests within one run.
    pub max_concurrent_translations: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            news_url: "https://www.bbc.com/news".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
            request_timeout_secs: 10,
            headline_tag: "h2".to_string(),
            headline_attr: "data-testid".to_string(),
            headline_attr_value: "card-headline".to_string(),
            max_headlines: 10,
            native_lang: "en".to_string(),
            translate_base_url: "https://translate.googleapis.com".to_string(),
            positive_threshold: 0.1,
            negative_threshold: -0.1,
            message_limit: 4096,
            max_concurrent_translations: 4,
        }
    }
}
