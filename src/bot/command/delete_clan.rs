use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, CreateCommand, CreateEmbedFooter,
};

use crate::{
    bot::{
        command, component,
        response::{failure, prompt, success, Responder},
    },
    model::pending::PendingKind,
    service::clan::ClanService,
    state::AppState,
};

pub const NAME: &str = "deleteclan";

fn title(clan: &str) -> String {
    format!("Suppression du clan {}", clan)
}

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Supprimer un clan")
        .add_option(command::clan_name_option())
}

/// Opens the deletion confirmation for an administrator or the clan's chief.
pub async fn run(state: &AppState, ctx: &Context, cmd: &CommandInteraction) {
    let responder = Responder::Command(cmd);
    let actor = command::actor(cmd);
    let Some(name) = command::clan_name(cmd) else {
        responder
            .embed(ctx, failure("Suppression de clan", "Nom de clan manquant"))
            .await;
        return;
    };

    let gateway = state.gateway(&ctx.http);
    let service = ClanService::new(&state.db, &gateway);
    if let Err(e) = service.check_delete(&actor, name).await {
        responder.fail(ctx, NAME, Some(name), actor.user_id, &title(name), &e).await;
        return;
    }

    let pending = state
        .pending
        .register(
            actor.user_id,
            PendingKind::DeleteClan {
                clan: name.to_string(),
            },
        )
        .await;

    let embed = prompt(
        &title(name),
        format!("Êtes-vous sûr de vouloir supprimer le clan {} ?", name),
    )
    .footer(CreateEmbedFooter::new("Cette action est irréversible"));

    responder
        .reply(
            ctx,
            embed,
            vec![component::confirm_buttons(pending, "Oui", "Non")],
        )
        .await;
}

/// Deletes the clan after the prompt was confirmed.
pub async fn confirm(
    state: &AppState,
    ctx: &Context,
    component: &ComponentInteraction,
    clan: &str,
) {
    let responder = Responder::Component(component);
    let actor = component::actor(component);

    let gateway = state.gateway(&ctx.http);
    let service = ClanService::new(&state.db, &gateway);

    match service.delete_clan(&actor, clan).await {
        Ok(()) => {
            responder
                .embed(
                    ctx,
                    success(&title(clan), format!("Le clan {} a été supprimé.", clan)),
                )
                .await
        }
        Err(e) => responder.fail(ctx, NAME, Some(clan), actor.user_id, &title(clan), &e).await,
    }
}

pub async fn refuse(ctx: &Context, component: &ComponentInteraction, clan: &str) {
    Responder::Component(component)
        .embed(
            ctx,
            failure(&title(clan), format!("Le clan {} n'a pas été supprimé.", clan)),
        )
        .await;
}
