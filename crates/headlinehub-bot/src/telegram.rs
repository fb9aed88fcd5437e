//! Minimal HTTP client for the Telegram Bot API.
//!
//! Wraps `reqwest` with the Bot API envelope handling (`ok`/`result`/
//! `description`) and typed response deserialization for the three methods
//! the bot needs: `getMe`, `getUpdates` (long poll), and `sendMessage`.

use std::time::Duration;

use serde::Deserialize;

use crate::error::BotError;

const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

#[derive(Debug, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub chat: Chat,
    pub from: Option<User>,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

/// Bot API response envelope.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

/// Client for the Telegram Bot API.
///
/// Use [`TelegramClient::new`] for production or
/// [`TelegramClient::with_base_url`] to point at a mock server in tests.
pub struct TelegramClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
    poll_timeout_secs: u64,
}

impl TelegramClient {
    /// Creates a client pointed at the production Bot API.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(token: &str, poll_timeout_secs: u64) -> Result<Self, BotError> {
        Self::with_base_url(token, poll_timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`BotError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn with_base_url(
        token: &str,
        poll_timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, BotError> {
        // The request timeout must outlive the server-side long-poll window.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(poll_timeout_secs + 10))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            poll_timeout_secs,
        })
    }

    /// Identify the bot account. Used as a startup credential check.
    ///
    /// # Errors
    ///
    /// - [`BotError::Api`] if Telegram rejects the token.
    /// - [`BotError::Http`] on network failure or non-2xx status.
    /// - [`BotError::Deserialize`] on an unexpected response shape.
    pub async fn get_me(&self) -> Result<User, BotError> {
        let url = self.method_url("getMe");
        let body = self.client.get(&url).send().await?.text().await?;
        Self::unwrap_envelope(&body, "getMe")
    }

    /// Long-poll for updates newer than `offset`.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`TelegramClient::get_me`].
    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>, BotError> {
        let url = self.method_url("getUpdates");
        let body = self
            .client
            .get(&url)
            .query(&[
                ("offset", offset.to_string()),
                ("timeout", self.poll_timeout_secs.to_string()),
            ])
            .send()
            .await?
            .text()
            .await?;
        Self::unwrap_envelope(&body, "getUpdates")
    }

    /// Send a plain-text message to a chat.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`TelegramClient::get_me`].
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), BotError> {
        let url = self.method_url("sendMessage");
        let body = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "chat_id": chat_id, "text": text }))
            .send()
            .await?
            .text()
            .await?;
        let _: Message = Self::unwrap_envelope(&body, "sendMessage")?;
        Ok(())
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{method}", self.base_url, self.token)
    }

    /// Parse the Bot API envelope, surfacing `ok: false` as [`BotError::Api`].
    fn unwrap_envelope<T: for<'de> Deserialize<'de>>(
        body: &str,
        context: &str,
    ) -> Result<T, BotError> {
        let envelope: ApiResponse<T> =
            serde_json::from_str(body).map_err(|e| BotError::Deserialize {
                context: context.to_string(),
                source: e,
            })?;
        if !envelope.ok {
            return Err(BotError::Api(
                envelope
                    .description
                    .unwrap_or_else(|| "unknown error".to_string()),
            ));
        }
        envelope.result.ok_or_else(|| {
            BotError::Api(format!("{context}: envelope ok but result missing"))
        })
    }
}

#[cfg(test)]
#[path = "telegram_test.rs"]
mod tests;
