//! `/files user [name]` — lists another user's codes, or sends one of them,
//! decoded, to the requester by direct message.

use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::Context;

use super::reply::{ReplySink, SlashReply, Visibility, missing_option, respond};
use super::{UserRef, string_option, user_option};
use crate::database::codes::{self, CodeStore};
use crate::database::models::CodeSummary;
use crate::model::AppState;
use crate::util::decode;

const USER: &str = "user";
const NAME: &str = "name";

pub fn register() -> CreateCommand {
    CreateCommand::new("files")
        .description("List a user's saved codes")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::User,
                USER,
                "User whose codes you want to see",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                NAME,
                "Specific code to retrieve",
            )
            .required(false),
        )
}

/// Formats one listing line: ``- `name` (created 2024-05-01)``.
pub fn format_entry(summary: &CodeSummary) -> String {
    format!(
        "- `{}` (created {})",
        summary.name,
        summary.created_at.format("%Y-%m-%d")
    )
}

pub async fn execute(
    store: &dyn CodeStore,
    target: &UserRef,
    name: Option<&str>,
    out: &dyn ReplySink,
) {
    match name {
        Some(name) => send_one(store, target, name, out).await,
        None => list_all(store, target, out).await,
    }
}

async fn send_one(store: &dyn CodeStore, target: &UserRef, name: &str, out: &dyn ReplySink) {
    let Some(payload) = codes::get(store, &target.id, name).await else {
        respond(
            out,
            format!("❌ No code named '{}' found for {}.", name, target.name),
            Visibility::Ephemeral,
        )
        .await;
        return;
    };
    // The decoded content goes to whoever asked, not to the code's owner.
    let decoded = decode(&payload);
    let dm = format!("📁 Requested code: {}\n```\n{}\n```", name, decoded);
    let content = match out.direct_message(dm).await {
        Ok(()) => format!(
            "✅ Code '{}' from {} has been sent to you by direct message.",
            name, target.name
        ),
        Err(e) => {
            tracing::error!(
                target = "cmd.files",
                owner_id = %target.id,
                name = %name,
                error = ?e,
                "failed to deliver decoded code"
            );
            "❌ Failed to decode or deliver the direct message.".to_string()
        }
    };
    respond(out, content, Visibility::Ephemeral).await;
}

async fn list_all(store: &dyn CodeStore, target: &UserRef, out: &dyn ReplySink) {
    let entries = codes::list(store, &target.id).await;
    if entries.is_empty() {
        respond(
            out,
            format!("{} has no saved codes.", target.name),
            Visibility::Public,
        )
        .await;
        return;
    }
    let lines: Vec<String> = entries.iter().map(format_entry).collect();
    respond(
        out,
        format!("📋 Codes saved by {}:\n{}", target.name, lines.join("\n")),
        Visibility::Public,
    )
    .await;
}

/// Entry point once the `user` option has been resolved. A lookup failure is a
/// transport error, not a missing option.
pub async fn execute_resolved(
    store: &dyn CodeStore,
    target: anyhow::Result<Option<UserRef>>,
    name: Option<&str>,
    out: &dyn ReplySink,
) {
    match target {
        Ok(Some(target)) => execute(store, &target, name, out).await,
        Ok(None) => missing_option(out, USER).await,
        Err(e) => {
            tracing::error!(target = "cmd.files", error = ?e, "failed to resolve target user");
            respond(out, "❌ Failed to look up that user.", Visibility::Ephemeral).await;
        }
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, state: &AppState) {
    let out = SlashReply::new(ctx, interaction);
    let target = user_option(ctx, interaction, USER).await;
    let name = string_option(interaction, NAME);
    execute_resolved(state.store.as_ref(), target, name, &out).await;
}
