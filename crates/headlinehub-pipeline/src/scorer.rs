//! Lexicon-based headline sentiment scorer.

use crate::types::{PipelineConfig, Sentiment, SentimentClass};

/// News-headline word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("wins", 0.5),
    ("win", 0.4),
    ("victory", 0.5),
    ("triumph", 0.5),
    ("celebrates", 0.4),
    ("celebration", 0.4),
    ("record", 0.3),
    ("breakthrough", 0.5),
    ("success", 0.4),
    ("successful", 0.4),
    ("rescue", 0.4),
    ("rescued", 0.4),
    ("recovery", 0.3),
    ("peace", 0.4),
    ("deal", 0.2),
    ("agreement", 0.3),
    ("growth", 0.3),
    ("boost", 0.3),
    ("hope", 0.3),
    ("hero", 0.4),
    ("landmark", 0.3),
    ("historic", 0.3),
    ("praise", 0.4),
    ("praised", 0.4),
    ("best", 0.4),
    ("thriving", 0.5),
    // Negative signals
    ("war", -0.6),
    ("attack", -0.6),
    ("attacks", -0.6),
    ("dead", -0.7),
    ("death", -0.7),
    ("deaths", -0.7),
    ("dies", -0.7),
    ("killed", -0.7),
    ("kills", -0.7),
    ("crisis", -0.5),
    ("crash", -0.5),
    ("collapse", -0.5),
    ("disaster", -0.6),
    ("fears", -0.4),
    ("fear", -0.4),
    ("threat", -0.4),
    ("warning", -0.4),
    ("warns", -0.4),
    ("fraud", -0.5),
    ("scandal", -0.5),
    ("strike", -0.3),
    ("violence", -0.6),
    ("injured", -0.5),
    ("missing", -0.4),
    ("outbreak", -0.5),
    ("failure", -0.4),
    ("failed", -0.4),
    ("worst", -0.6),
    ("ban", -0.3),
    ("banned", -0.3),
    ("lawsuit", -0.4),
];

/// Score a headline using the lexicon.
///
/// Splits text into lowercase words, sums matching weights, and clamps
/// the result to `[-1.0, 1.0]`. Returns `0.0` for empty or unknown text,
/// so every string yields a score.
#[must_use]
pub fn lexicon_score(text: &str) -> f32 {
    let mut score = 0.0_f32;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        for &(lex_word, weight) in LEXICON {
            if w == lex_word {
                score += weight;
                break;
            }
        }
    }
    score.clamp(-1.0, 1.0)
}

/// Map a polarity score to a discrete class.
///
/// The dead zone around zero is deliberate: near-neutral headlines must not
/// be flagged as biased either way on model noise alone. Boundary values are
/// neutral.
#[must_use]
pub fn classify(polarity: f32, positive_threshold: f32, negative_threshold: f32) -> SentimentClass {
    if polarity > positive_threshold {
        SentimentClass::Positive
    } else if polarity < negative_threshold {
        SentimentClass::Negative
    } else {
        SentimentClass::Neutral
    }
}

/// Score and classify one headline. Never fails.
pub(crate) fn score_headline(text: &str, config: &PipelineConfig) -> Sentiment {
    let polarity = lexicon_score(text);
    Sentiment {
        polarity,
        class: classify(polarity, config.positive_threshold, config.negative_threshold),
    }
}
