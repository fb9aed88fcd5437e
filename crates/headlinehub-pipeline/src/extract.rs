//! Headline card extraction.

use regex::Regex;

use crate::types::PipelineConfig;

/// Extract headline texts matching the configured card signature.
///
/// Matches elements of the configured tag carrying the configured
/// attribute/value pair, takes at most `max_headlines` in document order,
/// strips nested tags, and whitespace-normalizes the text. Returns an empty
/// `Vec` when nothing matches — a recoverable "no content" condition the
/// orchestrator turns into [`crate::PipelineError::NoContent`]. If the
/// upstream markup changes, this is the expected failure path; there is no
/// self-healing selector discovery.
pub(crate) fn extract_headlines(html: &str, config: &PipelineConfig) -> Vec<String> {
    let pattern = format!(
        r#"(?is)<{tag}\b[^>]*\b{attr}\s*=\s*["']{value}["'][^>]*>(.*?)</{tag}\s*>"#,
        tag = regex::escape(&config.headline_tag),
        attr = regex::escape(&config.headline_attr),
        value = regex::escape(&config.headline_attr_value),
    );
    let Ok(re) = Regex::new(&pattern) else {
        tracing::warn!(pattern = %pattern, "headline selector did not compile to a valid pattern");
        return Vec::new();
    };

    re.captures_iter(html)
        .take(config.max_headlines)
        .filter_map(|cap| cap.get(1).map(|m| clean_text(m.as_str())))
        .filter(|text| !text.is_empty())
        .collect()
}

/// Strip nested tags and collapse whitespace runs to single spaces.
fn clean_text(input: &str) -> String {
    let mut no_tags = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => {
                in_tag = false;
                no_tags.push(' ');
            }
            _ if !in_tag => no_tags.push(ch),
            _ => {}
        }
    }
    no_tags.split_whitespace().collect::<Vec<_>>().join(" ")
}
