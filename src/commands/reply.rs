//! Outbound side of a command: replies to the triggering interaction and direct
//! messages to the invoker.
//!
//! Handlers only talk to `ReplySink`, which keeps their logic independent of the
//! gateway. `SlashReply` is the serenity-backed implementation.

use serenity::async_trait;
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage};
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;

/// Who can see a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Only the invoking user.
    Ephemeral,
    /// Everyone in the channel.
    Public,
}

#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn reply(&self, content: String, visibility: Visibility) -> anyhow::Result<()>;
    /// Private message to the user who invoked the command.
    async fn direct_message(&self, content: String) -> anyhow::Result<()>;
}

pub struct SlashReply<'a> {
    ctx: &'a Context,
    interaction: &'a CommandInteraction,
}

impl<'a> SlashReply<'a> {
    pub fn new(ctx: &'a Context, interaction: &'a CommandInteraction) -> Self {
        Self { ctx, interaction }
    }
}

#[async_trait]
impl ReplySink for SlashReply<'_> {
    async fn reply(&self, content: String, visibility: Visibility) -> anyhow::Result<()> {
        let message = CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(visibility == Visibility::Ephemeral);
        self.interaction
            .create_response(&self.ctx.http, CreateInteractionResponse::Message(message))
            .await?;
        Ok(())
    }

    async fn direct_message(&self, content: String) -> anyhow::Result<()> {
        self.interaction
            .user
            .direct_message(self.ctx, CreateMessage::new().content(content))
            .await?;
        Ok(())
    }
}

/// Sends a reply; delivery failures are logged and otherwise dropped.
pub async fn respond(out: &dyn ReplySink, content: impl Into<String>, visibility: Visibility) {
    if let Err(e) = out.reply(content.into(), visibility).await {
        tracing::warn!(target = "reply", ?visibility, error = ?e, "failed to send reply");
    }
}

pub async fn missing_option(out: &dyn ReplySink, option: &str) {
    respond(
        out,
        format!("❌ Missing option '{}'.", option),
        Visibility::Ephemeral,
    )
    .await;
}
