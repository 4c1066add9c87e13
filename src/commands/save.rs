//! `/save name code` — stores a base64 code under the invoking user.

use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::Context;

use super::reply::{ReplySink, SlashReply, Visibility, missing_option, respond};
use super::{UserRef, string_option};
use crate::database::codes::{self, CodeStore};
use crate::model::AppState;
use crate::util::is_valid_base64;

const NAME: &str = "name";
const CODE: &str = "code";

pub fn register() -> CreateCommand {
    CreateCommand::new("save")
        .description("Save a base64 code under a name")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, NAME, "Name of the code to save")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, CODE, "Base64 code to save")
                .required(true),
        )
}

/// Validates and persists `code` for `invoker`. Every reply is ephemeral.
pub async fn execute(
    store: &dyn CodeStore,
    invoker: &UserRef,
    name: &str,
    code: &str,
    out: &dyn ReplySink,
) {
    if !is_valid_base64(code) {
        respond(out, "❌ The provided code is not valid base64.", Visibility::Ephemeral).await;
        return;
    }
    let content = if codes::save(store, &invoker.id, &invoker.name, name, code).await {
        tracing::info!(target = "cmd.save", owner_id = %invoker.id, name = %name, "code saved");
        format!("✅ Code '{}' saved successfully!", name)
    } else {
        "❌ Failed to save the code.".to_string()
    };
    respond(out, content, Visibility::Ephemeral).await;
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, state: &AppState) {
    let out = SlashReply::new(ctx, interaction);
    let Some(name) = string_option(interaction, NAME) else {
        return missing_option(&out, NAME).await;
    };
    let Some(code) = string_option(interaction, CODE) else {
        return missing_option(&out, CODE).await;
    };
    let invoker = UserRef::from(&interaction.user);
    execute(state.store.as_ref(), &invoker, name, code, &out).await;
}
