//! Bot config: Telegram connection, trigger file and logging. Loaded from env.

use anyhow::Result;
use std::env;

/// Default log file path.
pub const DEFAULT_LOG_FILE: &str = "logs/autorespond.log";

/// Bot config. Use [`BotConfig::load`] for env-based loading, then [`BotConfig::validate`].
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN; only required to run the bot
    pub bot_token: Option<String>,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// TRIGGERS_PATH; JSON file holding trigger → response pairs
    pub triggers_path: String,
    /// LOG_FILE
    pub log_file: String,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = token.or_else(|| env::var("BOT_TOKEN").ok());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let triggers_path = env::var("TRIGGERS_PATH")
            .unwrap_or_else(|_| storage::DEFAULT_TRIGGERS_PATH.to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            bot_token,
            telegram_api_url,
            triggers_path,
            log_file,
        })
    }

    /// Validate config (telegram_api_url must be a valid URL if set).
    pub fn validate(&self) -> Result<()> {
        self.telegram_api_url()?;
        Ok(())
    }

    /// The bot token, or an error naming the missing variable.
    pub fn require_bot_token(&self) -> Result<&str> {
        match self.bot_token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => anyhow::bail!("BOT_TOKEN not set (set it in .env or pass --token)"),
        }
    }

    /// Parsed API URL override, if any.
    pub fn telegram_api_url(&self) -> Result<Option<reqwest::Url>> {
        match self.telegram_api_url.as_deref() {
            None => Ok(None),
            Some(url_str) => match reqwest::Url::parse(url_str) {
                Ok(url) => Ok(Some(url)),
                Err(_) => anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                ),
            },
        }
    }
}
