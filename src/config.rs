//! Runtime configuration passed explicitly to each collaborator.
//!
//! Nothing outside this module reads the process environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_CHAT_BASE_URL: &str = "https://webexapis.com/v1";
pub const DEFAULT_ROOM_TITLE: &str = "Mini Pokedex CLI Room";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const APP_DIR: &str = "mini-pokedex";
const DB_FILENAME: &str = "history.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub chat: ChatConfig,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub room_title: String,
    pub members: Vec<String>,
    pub timeout: Duration,
}

impl Config {
    /// Build configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key/value source.
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let timeout = match get("POKEDEX_HTTP_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.parse::<u64>()
                    .with_context(|| format!("POKEDEX_HTTP_TIMEOUT_SECS is not a number: {raw}"))?,
            ),
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let path = match get("POKEDEX_DB_PATH") {
            Some(p) => PathBuf::from(p),
            None => default_db_path()?,
        };

        let members = get("WEBEX_MEMBERS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            api: ApiConfig {
                base_url: get("POKEAPI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
                timeout,
            },
            storage: StorageConfig { path },
            chat: ChatConfig {
                base_url: get("WEBEX_API_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_CHAT_BASE_URL.to_string()),
                token: get("WEBEX_BOT_TOKEN"),
                room_title: get("WEBEX_ROOM_TITLE")
                    .unwrap_or_else(|| DEFAULT_ROOM_TITLE.to_string()),
                members,
                timeout,
            },
        })
    }
}

/// Platform data directory, e.g. `~/.local/share/mini-pokedex/history.db` on Linux
fn default_db_path() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Failed to get platform data directory")?;
    Ok(base.join(APP_DIR).join(DB_FILENAME))
}
