//! HeadlineHub Telegram bot.
//!
//! Thin command dispatcher over the headline pipeline: long-polls the Bot
//! API for updates and answers `/start` and `/news [lang]`.

mod commands;
mod error;
mod telegram;

use tracing_subscriber::EnvFilter;

use headlinehub_core::AppConfig;
use headlinehub_pipeline::{Pipeline, PipelineConfig};

use crate::telegram::TelegramClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = headlinehub_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::debug!(?config, "configuration loaded");

    let telegram = TelegramClient::new(&config.telegram_token, config.poll_timeout_secs)?;
    let pipeline = Pipeline::new(pipeline_config(&config))?;

    let me = telegram.get_me().await?;
    tracing::info!(
        bot_id = me.id,
        username = me.username.as_deref().unwrap_or("<unset>"),
        "bot is starting up"
    );

    tokio::select! {
        () = poll_loop(&telegram, &pipeline, me.username.as_deref()) => {},
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("received shutdown signal, stopping");
        }
    }

    Ok(())
}

/// Map the application config onto the pipeline's own configuration.
/// Thresholds, message limit, and translation concurrency stay at the
/// pipeline defaults.
fn pipeline_config(config: &AppConfig) -> PipelineConfig {
    PipelineConfig {
        news_url: config.news_url.clone(),
        user_agent: config.user_agent.clone(),
        request_timeout_secs: config.request_timeout_secs,
        headline_tag: config.headline_tag.clone(),
        headline_attr: config.headline_attr.clone(),
        headline_attr_value: config.headline_attr_value.clone(),
        max_headlines: config.max_headlines,
        native_lang: config.native_lang.clone(),
        translate_base_url: config.translate_base_url.clone(),
        ..PipelineConfig::default()
    }
}

/// Long-poll `getUpdates` forever, dispatching each update.
///
/// Poll errors are logged and retried after a short pause; a broken poll
/// must not take the bot down.
async fn poll_loop(telegram: &TelegramClient, pipeline: &Pipeline, bot_username: Option<&str>) {
    let mut offset = 0_i64;
    loop {
        match telegram.get_updates(offset).await {
            Ok(updates) => {
                for update in &updates {
                    offset = offset.max(update.update_id + 1);
                    commands::handle_update(telegram, pipeline, bot_username, update).await;
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "getUpdates failed; retrying");
                tokio::time::sleep(std::time::Duration::from_secs(3)).await;
            }
        }
    }
}
