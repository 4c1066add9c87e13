use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::Context;

use super::reply::{ReplySink, SlashReply, Visibility, missing_option, respond};
use super::string_option;

const TEXT: &str = "text";

pub fn register() -> CreateCommand {
    CreateCommand::new("encode")
        .description("Convert text to base64")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, TEXT, "Text to convert to base64")
                .required(true),
        )
}

pub async fn execute(text: &str, out: &dyn ReplySink) {
    let encoded = crate::util::encode(text);
    respond(
        out,
        format!("🔒 Text encoded to base64:\n```\n{}\n```", encoded),
        Visibility::Public,
    )
    .await;
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let out = SlashReply::new(ctx, interaction);
    let Some(text) = string_option(interaction, TEXT) else {
        return missing_option(&out, TEXT).await;
    };
    execute(text, &out).await;
}
