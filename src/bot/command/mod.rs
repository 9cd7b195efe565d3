//! Slash commands and user context menus.
//!
//! Each module owns one command: its registration, the handler for its invocation, and
//! the handlers for the prompt components it opens.

pub mod create_clan;
pub mod delete_clan;
pub mod history;
pub mod invite;
pub mod leave_clan;
pub mod promote;

use serenity::all::{
    Command, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, GuildId, ResolvedTarget,
};

use crate::{
    bot::response::failure,
    model::clan::{Actor, Target},
};

/// Name of the clan name argument shared by the slash commands.
pub const CLAN_NAME_OPTION: &str = "nom";

/// Names of every command the bot provides.
pub const NAMES: [&str; 6] = [
    create_clan::NAME,
    delete_clan::NAME,
    leave_clan::NAME,
    history::NAME,
    promote::NAME,
    invite::NAME,
];

pub fn is_known(name: &str) -> bool {
    NAMES.contains(&name)
}

/// Every command the bot provides.
pub fn all() -> Vec<CreateCommand> {
    vec![
        create_clan::register(),
        delete_clan::register(),
        leave_clan::register(),
        history::register(),
        promote::register(),
        invite::register(),
    ]
}

/// Replaces the commands registered on the managed guild.
pub async fn register_all(
    ctx: &Context,
    guild_id: GuildId,
) -> Result<Vec<Command>, serenity::Error> {
    guild_id.set_commands(&ctx.http, all()).await
}

/// Required `nom` argument naming a clan.
pub fn clan_name_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, CLAN_NAME_OPTION, "Nom du clan")
        .required(true)
}

/// Value of the `nom` argument of a slash command.
pub fn clan_name(cmd: &CommandInteraction) -> Option<&str> {
    cmd.data
        .options
        .iter()
        .find(|option| option.name == CLAN_NAME_OPTION)
        .and_then(|option| option.value.as_str())
}

pub fn actor(cmd: &CommandInteraction) -> Actor {
    Actor::from_interaction(&cmd.user, cmd.member.as_deref())
}

/// User a context menu was opened on.
pub fn target(cmd: &CommandInteraction) -> Option<Target> {
    match cmd.data.target() {
        Some(ResolvedTarget::User(user, _)) => Some(Target::from(user)),
        _ => None,
    }
}

/// Answer of a context menu whose target user could not be resolved.
pub fn missing_target(title: &str) -> CreateEmbed {
    failure(title, "Membre introuvable")
}
