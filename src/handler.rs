use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::{Command, Interaction};
use serenity::model::gateway::Ready;
use serenity::prelude::EventHandler;

use crate::commands::{self, CodeCommand};
use crate::model::AppState;

pub struct Handler {
    pub state: Arc<AppState>,
    registered: AtomicBool,
}

impl Handler {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            registered: AtomicBool::new(false),
        }
    }

    /// True exactly once per process; later `ready` events skip registration.
    pub fn claim_registration(&self) -> bool {
        self.registered
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };
        let Ok(kind) = CodeCommand::from_str(&command.data.name) else {
            tracing::debug!(
                target = "handler",
                name = %command.data.name,
                "ignoring unknown command"
            );
            return;
        };
        tracing::debug!(
            target = "handler",
            command = kind.name(),
            user_id = %command.user.id,
            "dispatch"
        );
        match kind {
            CodeCommand::Save => commands::save::run_slash(&ctx, &command, &self.state).await,
            CodeCommand::Files => commands::files::run_slash(&ctx, &command, &self.state).await,
            CodeCommand::Encode => commands::encode::run_slash(&ctx, &command).await,
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(target = "handler", "Bot connected as {}!", ready.user.tag());
        if !self.claim_registration() {
            return;
        }
        tracing::info!(target = "handler", "Registering slash commands...");
        match Command::set_global_commands(&ctx.http, commands::register_all()).await {
            Ok(registered) => {
                tracing::info!(
                    target = "handler",
                    count = registered.len(),
                    "Slash commands registered."
                );
            }
            Err(e) => {
                tracing::error!(target = "handler", error = ?e, "Error registering slash commands");
            }
        }
    }
}
