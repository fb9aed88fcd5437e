//! Message composition and length enforcement.

use crate::types::{FormattedHeadline, Translation};

/// Inline marker rendered when a headline's translation failed.
pub const TRANSLATION_FAILURE_MARKER: &str = "(translation unavailable)";

/// Appended when the composed message had to be cut to fit the transport
/// limit. Six characters, so a truncated message lands exactly on the limit.
const TRUNCATION_MARKER: &str = " [...]";

/// Render the batch as one outbound message.
///
/// Per headline: `<text> <sentiment glyph>` and, when translation was
/// requested, a second line `-> <translated text or failure marker>`. Blocks
/// are joined by a blank line under a title line that names the target
/// language when one was given. Deterministic: the same input renders
/// byte-identically every time.
///
/// The composed text is truncated to `limit` characters; truncation is
/// character-position based and may cut a headline mid-text. That is an
/// accepted lossy edge, not something to paper over with headline-boundary
/// logic.
#[must_use]
pub fn render_message(
    headlines: &[FormattedHeadline],
    target_lang: Option<&str>,
    limit: usize,
) -> String {
    let title = match target_lang {
        Some(lang) => format!("📰 Today's Top Headlines (translated to {lang})"),
        None => "📰 Today's Top Headlines".to_string(),
    };

    let mut message = title;
    for headline in headlines {
        message.push_str("\n\n");
        message.push_str(&headline.text);
        message.push(' ');
        message.push_str(headline.sentiment.class.marker());
        if let Some(translation) = &headline.translation {
            message.push_str("\n-> ");
            match translation {
                Translation::Translated(text) => message.push_str(text),
                Translation::Failed => message.push_str(TRANSLATION_FAILURE_MARKER),
            }
        }
    }

    truncate_to_limit(message, limit)
}

/// Hard-truncate `message` to `limit` characters, reserving room for the
/// truncation marker.
fn truncate_to_limit(message: String, limit: usize) -> String {
    if message.chars().count() <= limit {
        return message;
    }
    let keep = limit.saturating_sub(TRUNCATION_MARKER.chars().count());
    let mut out: String = message.chars().take(keep).collect();
    out.push_str(TRUNCATION_MARKER);
    out
}
