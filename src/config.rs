//! Process configuration read from the environment (and `.env`, if present).

use std::env;

use anyhow::Context as _;

pub struct Config {
    pub discord_token: String,
    pub application_id: u64,
    pub database_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("discord_token", &"<redacted>")
            .field("application_id", &self.application_id)
            .field("database_url", &"<redacted>")
            .finish()
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let require = |key: &str| {
            lookup(key).with_context(|| format!("Expected {} in the environment.", key))
        };
        let discord_token = require("DISCORD_TOKEN")?;
        let application_id = require("CLIENT_ID")?
            .trim()
            .parse::<u64>()
            .context("CLIENT_ID must be a valid number.")?;
        anyhow::ensure!(application_id != 0, "CLIENT_ID must be non-zero.");
        let database_url = require("DATABASE_URL")?;
        Ok(Self {
            discord_token,
            application_id,
            database_url,
        })
    }
}
