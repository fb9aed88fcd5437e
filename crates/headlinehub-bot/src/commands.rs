//! Command parsing and dispatch.

use headlinehub_pipeline::Pipeline;

use crate::telegram::{TelegramClient, Update};

/// Rendered to the user whenever a run fails fatally. Internal diagnostics
/// stay in the logs.
pub(crate) const APOLOGY: &str =
    "Sorry, I couldn't fetch the headlines right now. Please try again later.";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Start,
    /// `/news [lang]` — first whitespace-delimited argument, lower-cased,
    /// no further validation. Defaults to the native language.
    News { lang: String },
}

/// Parse a message text into a command. Returns `None` for anything the bot
/// does not handle, including `/command@OtherBot` mentions of other bots.
pub(crate) fn parse_command(text: &str, bot_username: Option<&str>) -> Option<Command> {
    let mut parts = text.split_whitespace();
    let first = parts.next()?;

    let (command, mention) = match first.split_once('@') {
        Some((command, mention)) => (command, Some(mention)),
        None => (first, None),
    };
    if let (Some(mention), Some(username)) = (mention, bot_username) {
        if !mention.eq_ignore_ascii_case(username) {
            return None;
        }
    }

    match command {
        "/start" => Some(Command::Start),
        "/news" => {
            let lang = parts
                .next()
                .map_or_else(|| "en".to_string(), str::to_lowercase);
            Some(Command::News { lang })
        }
        _ => None,
    }
}

/// Handle one incoming update end to end.
///
/// Pipeline failures never propagate to the caller; they are logged and
/// answered with the apology string. Send failures are logged and dropped —
/// there is nothing useful to do about an undeliverable reply.
pub(crate) async fn handle_update(
    telegram: &TelegramClient,
    pipeline: &Pipeline,
    bot_username: Option<&str>,
    update: &Update,
) {
    let Some(message) = &update.message else {
        return;
    };
    let Some(text) = &message.text else {
        return;
    };
    let Some(command) = parse_command(text, bot_username) else {
        return;
    };

    let chat_id = message.chat.id;
    let reply = match command {
        Command::Start => {
            let name = message
                .from
                .as_ref()
                .map_or("there", |user| user.first_name.as_str());
            format!(
                "Hey {name}!\n\nI'm HeadlineHub, your friendly news bot.\n\n\
                 Use /news to get the latest headlines, or /news <lang> \
                 (e.g. /news fr) to have them translated."
            )
        }
        Command::News { lang } => {
            tracing::info!(chat_id, lang = %lang, "handling /news");
            match pipeline.run_rendered(&lang).await {
                Ok(rendered) => rendered,
                Err(e) => {
                    tracing::warn!(chat_id, error = %e, "pipeline run failed");
                    APOLOGY.to_string()
                }
            }
        }
    };

    if let Err(e) = telegram.send_message(chat_id, &reply).await {
        tracing::warn!(chat_id, error = %e, "failed to send reply");
    }
}
