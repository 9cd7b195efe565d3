use serenity::all::{CommandInteraction, Context, Interaction};

use crate::{
    bot::{
        command::{self, create_clan, delete_clan, history, invite, leave_clan, promote},
        component,
        response::Responder,
    },
    state::AppState,
};

/// Routes an interaction to its command or component handler.
///
/// Known commands are deferred before their handler runs, and every handler answers the
/// interaction itself; nothing is returned to the event loop.
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(cmd) => {
            if command::is_known(&cmd.data.name) {
                Responder::Command(&cmd).defer(&ctx).await;
            }
            dispatch_command(state, &ctx, &cmd).await
        }
        Interaction::Component(component) => {
            component::handle_component(state, &ctx, &component).await
        }
        _ => {}
    }
}

async fn dispatch_command(state: &AppState, ctx: &Context, cmd: &CommandInteraction) {
    match cmd.data.name.as_str() {
        create_clan::NAME => create_clan::run(state, ctx, cmd).await,
        delete_clan::NAME => delete_clan::run(state, ctx, cmd).await,
        leave_clan::NAME => leave_clan::run(state, ctx, cmd).await,
        history::NAME => history::run(state, ctx, cmd).await,
        invite::NAME => invite::run(state, ctx, cmd).await,
        promote::NAME => promote::run(state, ctx, cmd).await,
        other => tracing::warn!("Received unknown command {}", other),
    }
}
