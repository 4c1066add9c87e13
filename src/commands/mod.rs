//! Slash commands. Each submodule exposes `register()` for the command builder,
//! `execute()` with the gateway-independent logic and `run_slash()` which pulls
//! the options out of the interaction.

pub mod encode;
pub mod files;
pub mod reply;
pub mod save;

use std::str::FromStr;

use anyhow::Context as _;
use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::model::user::User;
use serenity::prelude::Context;

/// The closed set of commands this bot answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeCommand {
    Save,
    Files,
    Encode,
}

impl CodeCommand {
    pub const ALL: [CodeCommand; 3] = [CodeCommand::Save, CodeCommand::Files, CodeCommand::Encode];

    pub fn name(self) -> &'static str {
        match self {
            CodeCommand::Save => "save",
            CodeCommand::Files => "files",
            CodeCommand::Encode => "encode",
        }
    }

    pub fn register(self) -> CreateCommand {
        match self {
            CodeCommand::Save => save::register(),
            CodeCommand::Files => files::register(),
            CodeCommand::Encode => encode::register(),
        }
    }
}

impl FromStr for CodeCommand {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "save" => Ok(CodeCommand::Save),
            "files" => Ok(CodeCommand::Files),
            "encode" => Ok(CodeCommand::Encode),
            _ => Err(()),
        }
    }
}

pub fn register_all() -> Vec<CreateCommand> {
    CodeCommand::ALL.into_iter().map(CodeCommand::register).collect()
}

/// The parts of a Discord user the handlers care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub id: String,
    pub name: String,
}

impl UserRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl From<&User> for UserRef {
    fn from(user: &User) -> Self {
        Self::new(user.id.get().to_string(), user.name.clone())
    }
}

pub(crate) fn string_option<'a>(
    interaction: &'a CommandInteraction,
    name: &str,
) -> Option<&'a str> {
    interaction
        .data
        .options
        .iter()
        .find(|o| o.name == name)
        .and_then(|o| o.value.as_str())
}

/// Resolves a user option, preferring the payload Discord already sent along.
/// `Ok(None)` means the option is absent; `Err` means the user could not be fetched.
pub(crate) async fn user_option(
    ctx: &Context,
    interaction: &CommandInteraction,
    name: &str,
) -> anyhow::Result<Option<UserRef>> {
    let Some(user_id) = interaction
        .data
        .options
        .iter()
        .find(|o| o.name == name)
        .and_then(|o| o.value.as_user_id())
    else {
        return Ok(None);
    };
    if let Some(user) = interaction.data.resolved.users.get(&user_id) {
        return Ok(Some(UserRef::from(user)));
    }
    let user = user_id
        .to_user(&ctx.http)
        .await
        .with_context(|| format!("failed to fetch user {}", user_id))?;
    Ok(Some(UserRef::from(&user)))
}
