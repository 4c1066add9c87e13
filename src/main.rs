use std::sync::Arc;

use serenity::model::gateway::GatewayIntents;
use serenity::model::id::ApplicationId;
use serenity::prelude::*;
use tracing_subscriber::EnvFilter;

use codekeeper_bot::config::Config;
use codekeeper_bot::database::{PgCodeStore, init};
use codekeeper_bot::handler::Handler;
use codekeeper_bot::model::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    let pool = match init::connect(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(target = "db", error = ?e, "Database connection error");
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(Arc::new(PgCodeStore::new(pool))));

    // Slash commands only need GUILDS; nothing here reads message content.
    let intents = GatewayIntents::GUILDS;

    let mut client = Client::builder(&config.discord_token, intents)
        .application_id(ApplicationId::new(config.application_id))
        .event_handler(Handler::new(state))
        .await?;

    if let Err(why) = client.start().await {
        tracing::error!(error = ?why, "Client error");
        return Err(why.into());
    }
    Ok(())
}
