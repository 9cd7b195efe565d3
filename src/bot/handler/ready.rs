//! Ready event handler for bot initialization.
//!
//! The ready event fires once per gateway connection after authentication. It is used to
//! log connection information and to register the clan commands on the managed guild.

use serenity::all::{Context, Ready};

use crate::{bot::command, state::AppState};

/// Handles the ready event when the bot connects to Discord.
///
/// Commands are overwritten in bulk, so registering again after a reconnect is harmless.
///
/// # Arguments
/// - `state` - Shared state holding the managed guild ID
/// - `ctx` - Discord context for the registration request
/// - `ready` - Ready event data containing bot user and guild information
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);
    for guild in &ready.guilds {
        tracing::info!("Available in guild {}", guild.id);
    }

    match command::register_all(&ctx, state.guild_id).await {
        Ok(commands) => tracing::info!(
            "Registered {} commands on guild {}",
            commands.len(),
            state.guild_id
        ),
        Err(e) => tracing::error!(
            "Failed to register commands on guild {}: {}",
            state.guild_id,
            e
        ),
    }
}
